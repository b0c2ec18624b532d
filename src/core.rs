use crate::evaluator;
use crate::types::{Int, PrimitiveFn, Value};
use std::collections::HashMap;

fn grab_ints(args: &[Value]) -> evaluator::Result<Vec<Int>> {
    let type_check: Result<Vec<_>, _> = args.iter().map(|o| o.as_int()).collect();
    type_check.map_err(evaluator::Error::TypeMismatch)
}

static SUM: PrimitiveFn = PrimitiveFn {
    name: "+",
    fn_ptr: sum_,
};

fn sum_(args: &[Value]) -> evaluator::Result {
    let value = grab_ints(args)?
        .iter()
        .fold(0 as Int, |acc, &x| acc.wrapping_add(x));
    Ok(Value::Integer(value))
}

static SUB: PrimitiveFn = PrimitiveFn {
    name: "-",
    fn_ptr: sub_,
};

fn sub_(args: &[Value]) -> evaluator::Result {
    let value = match grab_ints(args)?.as_slice() {
        [] => 0,
        [x] => x.wrapping_neg(),
        [x, rest @ ..] => rest.iter().fold(*x, |acc, &y| acc.wrapping_sub(y)),
    };
    Ok(Value::Integer(value))
}

static MUL: PrimitiveFn = PrimitiveFn {
    name: "*",
    fn_ptr: mul_,
};

fn mul_(args: &[Value]) -> evaluator::Result {
    let value = grab_ints(args)?
        .iter()
        .fold(1 as Int, |acc, &x| acc.wrapping_mul(x));
    Ok(Value::Integer(value))
}

static LE: PrimitiveFn = PrimitiveFn {
    name: "<=",
    fn_ptr: le_,
};

// Vacuously true for fewer than two arguments.
fn le_(args: &[Value]) -> evaluator::Result {
    let ints = grab_ints(args)?;
    Ok(Value::Bool(ints.windows(2).all(|pair| pair[0] <= pair[1])))
}

type Namespace = HashMap<&'static str, &'static PrimitiveFn>;
lazy_static! {
    pub static ref CORE: Namespace = {
        let mut map = Namespace::new();
        for &func in [
            // Arithmetic
            &SUM,
            &SUB,
            &MUL,
            // Comparisons
            &LE,
        ].iter() {
            map.insert(func.name, func);
        }
        map
    };
}
