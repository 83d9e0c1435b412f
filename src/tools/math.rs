// ABOUTME: Math tool catalog - arithmetic and descriptive statistics.
// ABOUTME: Integer inputs stay integral where the operation allows it.

use crate::error::{ToolError, ToolErrorKind};
use crate::tool::{Number, Param, ParamDefault, ParamKind, ToolSpec, Value};

const TWO_NUMBERS: &[Param] = &[
    Param::required("a", ParamKind::Number),
    Param::required("b", ParamKind::Number),
];
const ONE_NUMBER: &[Param] = &[Param::required("number", ParamKind::Number)];
const NUMBER_LIST: &[Param] = &[Param::required("numbers", ParamKind::NumberList)];

/// The `math` catalog, in display order.
pub static MATH_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "add",
        description: "Add two numbers.",
        params: TWO_NUMBERS,
        run: |args| Ok(add(args.number(0)?, args.number(1)?).into()),
    },
    ToolSpec {
        name: "subtract",
        description: "Subtract b from a.",
        params: TWO_NUMBERS,
        run: |args| Ok(subtract(args.number(0)?, args.number(1)?).into()),
    },
    ToolSpec {
        name: "multiply",
        description: "Multiply two numbers.",
        params: TWO_NUMBERS,
        run: |args| Ok(multiply(args.number(0)?, args.number(1)?).into()),
    },
    ToolSpec {
        name: "divide",
        description: "Divide a by b.",
        params: TWO_NUMBERS,
        run: |args| divide(args.number(0)?, args.number(1)?).map(Value::Float),
    },
    ToolSpec {
        name: "power",
        description: "Raise base to the power of exponent.",
        params: &[
            Param::required("base", ParamKind::Number),
            Param::required("exponent", ParamKind::Number),
        ],
        run: |args| power(args.number(0)?, args.number(1)?).map(Value::from),
    },
    ToolSpec {
        name: "square_root",
        description: "Calculate the square root of a number.",
        params: ONE_NUMBER,
        run: |args| square_root(args.number(0)?).map(Value::Float),
    },
    ToolSpec {
        name: "average",
        description: "Calculate the average of a list of numbers.",
        params: NUMBER_LIST,
        run: |args| average(&args.numbers(0)?).map(Value::Float),
    },
    ToolSpec {
        name: "median",
        description: "Calculate the median of a list of numbers.",
        params: NUMBER_LIST,
        run: |args| median(&args.numbers(0)?).map(Value::from),
    },
    ToolSpec {
        name: "maximum",
        description: "Find the maximum value in a list of numbers.",
        params: NUMBER_LIST,
        run: |args| maximum(&args.numbers(0)?).map(Value::from),
    },
    ToolSpec {
        name: "minimum",
        description: "Find the minimum value in a list of numbers.",
        params: NUMBER_LIST,
        run: |args| minimum(&args.numbers(0)?).map(Value::from),
    },
    ToolSpec {
        name: "absolute_value",
        description: "Calculate the absolute value of a number.",
        params: ONE_NUMBER,
        run: |args| Ok(absolute_value(args.number(0)?).into()),
    },
    ToolSpec {
        name: "factorial",
        description: "Calculate the factorial of a non-negative integer.",
        params: &[Param::required("n", ParamKind::Integer)],
        run: |args| factorial(args.number(0)?).map(Value::Int),
    },
    ToolSpec {
        name: "percentage",
        description: "Calculate what percentage 'part' is of 'whole'.",
        params: &[
            Param::required("part", ParamKind::Number),
            Param::required("whole", ParamKind::Number),
        ],
        run: |args| percentage(args.number(0)?, args.number(1)?).map(Value::Float),
    },
    ToolSpec {
        name: "round_number",
        description: "Round a number to specified decimal places.",
        params: &[
            Param::required("number", ParamKind::Number),
            Param::optional("decimals", ParamKind::Integer, ParamDefault::Int(0)),
        ],
        run: |args| Ok(round_number(args.number(0)?, args.integer(1)?).into()),
    },
];

fn int_or_float(int: Option<i64>, float: impl FnOnce() -> f64) -> Number {
    match int {
        Some(n) => Number::Int(n),
        None => Number::Float(float()),
    }
}

pub fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_or_float(x.checked_add(y), || x as f64 + y as f64),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

pub fn subtract(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_or_float(x.checked_sub(y), || x as f64 - y as f64),
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

pub fn multiply(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_or_float(x.checked_mul(y), || x as f64 * y as f64),
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

pub fn divide(a: Number, b: Number) -> Result<f64, ToolError> {
    if b.is_zero() {
        return Err(ToolError::execution(
            ToolErrorKind::DivisionByZero,
            "Cannot divide by zero",
        ));
    }
    Ok(a.as_f64() / b.as_f64())
}

pub fn power(base: Number, exponent: Number) -> Result<Number, ToolError> {
    if base.is_zero() && exponent.is_negative() {
        return Err(ToolError::execution(
            ToolErrorKind::DivisionByZero,
            "0 cannot be raised to a negative power",
        ));
    }
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if let Ok(e) = u32::try_from(e) {
            return Ok(int_or_float(b.checked_pow(e), || (b as f64).powf(e as f64)));
        }
    }
    let result = base.as_f64().powf(exponent.as_f64());
    if result.is_nan() {
        return Err(ToolError::execution(
            ToolErrorKind::InvalidDomain,
            "Result is not a real number",
        ));
    }
    Ok(Number::Float(result))
}

pub fn square_root(number: Number) -> Result<f64, ToolError> {
    if number.is_negative() {
        return Err(ToolError::execution(
            ToolErrorKind::InvalidDomain,
            "Cannot calculate square root of negative number",
        ));
    }
    Ok(number.as_f64().sqrt())
}

fn non_empty<'a>(numbers: &'a [Number], what: &str) -> Result<&'a [Number], ToolError> {
    if numbers.is_empty() {
        return Err(ToolError::execution(
            ToolErrorKind::EmptyInput,
            format!("Cannot {} of empty list", what),
        ));
    }
    Ok(numbers)
}

pub fn average(numbers: &[Number]) -> Result<f64, ToolError> {
    let numbers = non_empty(numbers, "calculate average")?;
    let sum: f64 = numbers.iter().map(|n| n.as_f64()).sum();
    Ok(sum / numbers.len() as f64)
}

pub fn median(numbers: &[Number]) -> Result<Number, ToolError> {
    let numbers = non_empty(numbers, "calculate median")?;
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.as_f64().total_cmp(&b.as_f64()));

    let n = sorted.len();
    if n % 2 == 0 {
        Ok(Number::Float(
            (sorted[n / 2 - 1].as_f64() + sorted[n / 2].as_f64()) / 2.0,
        ))
    } else {
        Ok(sorted[n / 2])
    }
}

/// First maximum wins on ties.
pub fn maximum(numbers: &[Number]) -> Result<Number, ToolError> {
    let numbers = non_empty(numbers, "find maximum")?;
    Ok(numbers[1..].iter().fold(numbers[0], |best, &n| {
        if n.as_f64() > best.as_f64() { n } else { best }
    }))
}

/// First minimum wins on ties.
pub fn minimum(numbers: &[Number]) -> Result<Number, ToolError> {
    let numbers = non_empty(numbers, "find minimum")?;
    Ok(numbers[1..].iter().fold(numbers[0], |best, &n| {
        if n.as_f64() < best.as_f64() { n } else { best }
    }))
}

pub fn absolute_value(number: Number) -> Number {
    match number {
        Number::Int(n) => int_or_float(n.checked_abs(), || (n as f64).abs()),
        Number::Float(f) => Number::Float(f.abs()),
    }
}

pub fn factorial(n: Number) -> Result<i64, ToolError> {
    let n = match n {
        Number::Int(n) => n,
        Number::Float(f) if f.fract() == 0.0 && f.is_finite() => f as i64,
        Number::Float(_) => {
            return Err(ToolError::execution(
                ToolErrorKind::InvalidDomain,
                "factorial() only accepts integral values",
            ));
        }
    };
    if n < 0 {
        return Err(ToolError::execution(
            ToolErrorKind::InvalidDomain,
            "Factorial is not defined for negative numbers",
        ));
    }
    (2..=n)
        .try_fold(1i64, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| {
            ToolError::execution(
                ToolErrorKind::Overflow,
                format!("factorial({}) exceeds the supported integer range", n),
            )
        })
}

pub fn percentage(part: Number, whole: Number) -> Result<f64, ToolError> {
    if whole.is_zero() {
        return Err(ToolError::execution(
            ToolErrorKind::DivisionByZero,
            "Cannot calculate percentage with zero as whole",
        ));
    }
    Ok(part.as_f64() / whole.as_f64() * 100.0)
}

/// Round half to even. Integers stay integers.
pub fn round_number(number: Number, decimals: i64) -> Number {
    match number {
        Number::Int(n) if decimals >= 0 => Number::Int(n),
        Number::Int(n) => Number::Int(round_int(n, decimals.unsigned_abs())),
        Number::Float(x) => {
            if !x.is_finite() || decimals > 300 {
                return Number::Float(x);
            }
            let decimals = decimals.max(-300) as i32;
            let factor = 10f64.powi(decimals);
            let rounded = (x * factor).round_ties_even() / factor;
            Number::Float(if rounded.is_finite() { rounded } else { x })
        }
    }
}

fn round_int(n: i64, digits: u64) -> i64 {
    if digits > 18 {
        return 0;
    }
    let factor = 10i128.pow(digits as u32);
    let n = n as i128;
    let quotient = n.div_euclid(factor);
    let remainder = n.rem_euclid(factor);
    let rounded = match (remainder * 2).cmp(&factor) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    };
    i64::try_from(rounded * factor).unwrap_or(if n < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
pub(crate) fn call(name: &str, args: Vec<Value>) -> Result<Value, ToolError> {
    MATH_TOOLS
        .iter()
        .find(|s| s.name == name)
        .expect("math tool exists")
        .call(&args)
}
