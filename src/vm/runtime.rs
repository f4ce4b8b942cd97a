//! Runtime support routines reached through `CALL_RUNTIME`.

use rockstar_core::{Arithmetic, RuntimeError, RuntimeFn, Value};

/// Run `function` on `args`, which are in call order.
pub(super) fn call(function: RuntimeFn, args: &[Value], line: u32) -> Result<Value, RuntimeError> {
    match (function, args) {
        (RuntimeFn::ToText, [value]) => Ok(Value::Text(value.to_text())),
        (RuntimeFn::Add, [left, right]) => left
            .arithmetic(Arithmetic::Add, right)
            .map_err(|mismatch| mismatch.at_line(line)),
        (RuntimeFn::Concat, [left, right]) => Ok(left.concat(right)),
        _ => Err(RuntimeError::RuntimeArity {
            name: function.name(),
            expected: function.arity(),
            got: args.len() as u8,
        }),
    }
}
