// ABOUTME: Implements the Registry - an immutable catalog of named tool
// ABOUTME: functions with parameter descriptors and typed argument access.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::{Number, Value};
use crate::error::ToolError;

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Integer,
    NumberList,
    Text,
    Flag,
}

/// Default used when an optional parameter is omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Flag(bool),
    Int(i64),
}

/// A declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: Option<ParamDefault>,
}

impl Param {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, default: ParamDefault) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
        }
    }
}

/// Signature of every tool function.
pub type ToolFn = fn(&Args<'_>) -> Result<Value, ToolError>;

/// A tagged function descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
    pub run: ToolFn,
}

impl ToolSpec {
    /// Number of parameters without a default.
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.default.is_none()).count()
    }

    /// Render e.g. `round_number(number, decimals=0)`.
    pub fn signature(&self) -> String {
        let mut out = format!("{}(", self.name);
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(param.name);
            match param.default {
                Some(ParamDefault::Flag(true)) => out.push_str("=True"),
                Some(ParamDefault::Flag(false)) => out.push_str("=False"),
                Some(ParamDefault::Int(n)) => {
                    let _ = write!(out, "={}", n);
                }
                None => {}
            }
        }
        out.push(')');
        out
    }

    /// Check arity, then invoke the function positionally.
    pub fn call(&self, values: &[Value]) -> Result<Value, ToolError> {
        let required = self.required_count();
        let max = self.params.len();
        if values.len() < required || values.len() > max {
            let expected = if required == max {
                format!("{}", max)
            } else {
                format!("{} to {}", required, max)
            };
            return Err(ToolError::InvalidParams(format!(
                "{} takes {} argument(s) but {} were given",
                self.signature(),
                expected,
                values.len()
            )));
        }
        (self.run)(&Args { spec: self, values })
    }
}

/// Positional arguments with accessors that validate kinds.
pub struct Args<'a> {
    spec: &'a ToolSpec,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn param(&self, index: usize) -> &'static str {
        self.spec.params.get(index).map(|p| p.name).unwrap_or("?")
    }

    fn required(&self, index: usize) -> Result<&'a Value, ToolError> {
        self.values.get(index).ok_or_else(|| {
            ToolError::InvalidParams(format!("missing argument '{}'", self.param(index)))
        })
    }

    fn mismatch(&self, index: usize, expected: &str, got: &Value) -> ToolError {
        ToolError::InvalidParams(format!(
            "argument '{}' must be {}, got {}",
            self.param(index),
            expected,
            got.type_name()
        ))
    }

    pub fn number(&self, index: usize) -> Result<Number, ToolError> {
        let value = self.required(index)?;
        value
            .as_number()
            .ok_or_else(|| self.mismatch(index, "a number", value))
    }

    pub fn integer(&self, index: usize) -> Result<i64, ToolError> {
        let value = match self.values.get(index) {
            Some(v) => v,
            None => match self.spec.params.get(index).and_then(|p| p.default) {
                Some(ParamDefault::Int(n)) => return Ok(n),
                _ => self.required(index)?,
            },
        };
        match value {
            Value::Int(n) => Ok(*n),
            Value::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(*f as i64),
            other => Err(self.mismatch(index, "an integer", other)),
        }
    }

    pub fn numbers(&self, index: usize) -> Result<Vec<Number>, ToolError> {
        let value = self.required(index)?;
        let Value::List(items) = value else {
            return Err(self.mismatch(index, "a list of numbers", value));
        };
        items
            .iter()
            .map(|item| {
                item.as_number()
                    .ok_or_else(|| self.mismatch(index, "a list of numbers", item))
            })
            .collect()
    }

    pub fn text(&self, index: usize) -> Result<&'a str, ToolError> {
        let value = self.required(index)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(index, "a string", value))
    }

    pub fn flag(&self, index: usize) -> Result<bool, ToolError> {
        let value = match self.values.get(index) {
            Some(v) => v,
            None => match self.spec.params.get(index).and_then(|p| p.default) {
                Some(ParamDefault::Flag(b)) => return Ok(b),
                _ => self.required(index)?,
            },
        };
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(n) => Ok(*n != 0),
            other => Err(self.mismatch(index, "a boolean", other)),
        }
    }
}

/// An immutable catalog of tools for one namespace.
#[derive(Debug, Clone)]
pub struct Registry {
    namespace: &'static str,
    specs: &'static [ToolSpec],
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry over a static catalog.
    pub fn new(namespace: &'static str, specs: &'static [ToolSpec]) -> Self {
        let index = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.name, i))
            .collect();
        Self {
            namespace,
            specs,
            index,
        }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&'static ToolSpec> {
        let specs: &'static [ToolSpec] = self.specs;
        self.index.get(name).map(|&i| &specs[i])
    }

    /// List all tool names in catalog order.
    pub fn list(&self) -> Vec<&'static str> {
        self.specs.iter().map(|s| s.name).collect()
    }

    /// All descriptors in catalog order.
    pub fn all(&self) -> &'static [ToolSpec] {
        self.specs
    }

    /// Get the number of registered tools.
    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// Look up `name` and call it with positional arguments.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, ToolError> {
        let spec = self.get(name).ok_or_else(|| ToolError::NotFound {
            name: name.to_string(),
            available: self.list().join(", "),
        })?;
        spec.call(args)
    }
}
