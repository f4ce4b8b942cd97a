//! Stack VM for compiled Rockstar programs.
//!
//! Executes a [`CompiledProgram`]'s entry routine from the first byte to
//! `RETURN`. Every field starts out mysterious. Output lines go to the
//! writer passed to [`Vm::execute`].

mod runtime;

use std::io::Write;

use rockstar_compiler::{CompiledProgram, Constant, OpCode};
use rockstar_core::{Arithmetic, Comparison, RuntimeError, RuntimeFn, Value};

type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    Ready,
    Finished,
}

pub struct Vm<'p> {
    program: &'p CompiledProgram,
    fields: Vec<Value>,
    stack: Vec<Value>,
    ip: usize,
    /// Source line of the instruction being executed.
    line: u32,
    state: VmState,
}

impl<'p> Vm<'p> {
    pub fn new(program: &'p CompiledProgram) -> Self {
        Self {
            program,
            fields: vec![Value::Mysterious; program.fields.len()],
            stack: Vec::with_capacity(16),
            ip: 0,
            line: 0,
            state: VmState::Ready,
        }
    }

    /// Run `program` to completion, writing its output to `out`.
    pub fn run(program: &CompiledProgram, out: &mut impl Write) -> Result<()> {
        Vm::new(program).execute(out)
    }

    pub fn state(&self) -> VmState {
        self.state
    }

    /// Current field values, indexed like `program.fields`.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Current value of the field with the given slot name.
    pub fn field(&self, slot_name: &str) -> Option<&Value> {
        let index = self
            .program
            .fields
            .iter()
            .position(|f| f.slot_name == slot_name)?;
        self.fields.get(index)
    }

    /// Execute the entry routine. A finished VM does nothing.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn execute(&mut self, out: &mut impl Write) -> Result<()> {
        let program = self.program;
        let chunk = &program.entry;

        while self.state == VmState::Ready {
            let offset = self.ip;
            let byte = chunk
                .read_byte(offset)
                .ok_or(RuntimeError::TruncatedInstruction { offset })?;
            let op = OpCode::from_u8(byte).ok_or(RuntimeError::InvalidOpcode { byte, offset })?;
            if let Some(line) = chunk.line_at(offset) {
                if line != self.line {
                    log::trace!("{}: line {line}", program.name);
                    self.line = line;
                }
            }
            self.ip += 1;

            match op {
                OpCode::Constant => {
                    let index = u32::from(self.read_byte()?);
                    self.push_constant(index)?;
                }
                OpCode::ConstantWide => {
                    let index = u32::from(self.read_u16()?);
                    self.push_constant(index)?;
                }
                OpCode::PushTrue => self.stack.push(Value::Boolean(true)),
                OpCode::PushFalse => self.stack.push(Value::Boolean(false)),
                OpCode::PushNull => self.stack.push(Value::Null),
                OpCode::PushMysterious => self.stack.push(Value::Mysterious),

                OpCode::GetField => {
                    let index = self.read_u16()?;
                    let value = self
                        .fields
                        .get(usize::from(index))
                        .cloned()
                        .ok_or(RuntimeError::BadField { index })?;
                    self.stack.push(value);
                }
                OpCode::SetField => {
                    let index = self.read_u16()?;
                    let value = self.pop()?;
                    let field = self
                        .fields
                        .get_mut(usize::from(index))
                        .ok_or(RuntimeError::BadField { index })?;
                    *field = value;
                }

                OpCode::AddF64 => self.typed_arithmetic(Arithmetic::Add)?,
                OpCode::SubF64 => self.typed_arithmetic(Arithmetic::Subtract)?,
                OpCode::MulF64 => self.typed_arithmetic(Arithmetic::Multiply)?,
                OpCode::DivF64 => self.typed_arithmetic(Arithmetic::Divide)?,

                OpCode::ExpectNumber => {
                    let depth = usize::from(self.read_byte()?);
                    let index = self
                        .stack
                        .len()
                        .checked_sub(depth + 1)
                        .ok_or(RuntimeError::StackUnderflow { offset })?;
                    let value = &self.stack[index];
                    if value.as_number().is_none() {
                        return Err(RuntimeError::ExpectedNumber {
                            actual: value.type_name(),
                            line: self.line,
                        });
                    }
                }

                OpCode::Equal | OpCode::NotEqual => {
                    let (left, right) = self.pop_pair()?;
                    let equal = left.equals(&right);
                    self.stack.push(Value::Boolean(equal == (op == OpCode::Equal)));
                }
                OpCode::Less => self.compare(Comparison::Less)?,
                OpCode::LessEqual => self.compare(Comparison::LessEqual)?,
                OpCode::Greater => self.compare(Comparison::Greater)?,
                OpCode::GreaterEqual => self.compare(Comparison::GreaterEqual)?,

                OpCode::Not => {
                    let value = self.pop()?;
                    self.stack.push(Value::Boolean(!value.is_truthy()));
                }
                OpCode::And | OpCode::Or | OpCode::Nor => {
                    let (left, right) = self.pop_pair()?;
                    let (l, r) = (left.is_truthy(), right.is_truthy());
                    let result = match op {
                        OpCode::And => l && r,
                        OpCode::Or => l || r,
                        _ => !(l || r),
                    };
                    self.stack.push(Value::Boolean(result));
                }

                OpCode::CallRuntime => self.call_runtime()?,

                OpCode::WriteLine => {
                    let value = self.pop()?;
                    writeln!(out, "{value}").map_err(|e| RuntimeError::Output {
                        message: e.to_string(),
                    })?;
                }
                OpCode::Return => {
                    out.flush().map_err(|e| RuntimeError::Output {
                        message: e.to_string(),
                    })?;
                    self.state = VmState::Finished;
                }
            }
        }

        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = self
            .program
            .entry
            .read_byte(self.ip)
            .ok_or(RuntimeError::TruncatedInstruction { offset: self.ip })?;
        self.ip += 1;
        Ok(byte)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let value = self
            .program
            .entry
            .read_u16(self.ip)
            .ok_or(RuntimeError::TruncatedInstruction { offset: self.ip })?;
        self.ip += 2;
        Ok(value)
    }

    fn pop(&mut self) -> Result<Value> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { offset: self.ip })
    }

    /// Pop the right operand, then the left.
    fn pop_pair(&mut self) -> Result<(Value, Value)> {
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }

    fn push_constant(&mut self, index: u32) -> Result<()> {
        let value = self
            .program
            .constants
            .get(index)
            .and_then(Constant::to_value)
            .ok_or(RuntimeError::BadConstant { index })?;
        self.stack.push(value);
        Ok(())
    }

    fn typed_arithmetic(&mut self, op: Arithmetic) -> Result<()> {
        let (left, right) = self.pop_pair()?;
        match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => {
                self.stack.push(Value::Number(op.apply(l, r)));
                Ok(())
            }
            (None, _) => Err(RuntimeError::ExpectedNumber {
                actual: left.type_name(),
                line: self.line,
            }),
            (_, None) => Err(RuntimeError::ExpectedNumber {
                actual: right.type_name(),
                line: self.line,
            }),
        }
    }

    fn compare(&mut self, op: Comparison) -> Result<()> {
        let (left, right) = self.pop_pair()?;
        let holds = left
            .compare(op, &right)
            .map_err(|mismatch| mismatch.at_line(self.line))?;
        self.stack.push(Value::Boolean(holds));
        Ok(())
    }

    fn call_runtime(&mut self) -> Result<()> {
        let index = u32::from(self.read_u16()?);
        let argc = self.read_byte()?;

        let hash = match self.program.constants.get(index) {
            Some(Constant::RuntimeFn(hash)) => *hash,
            _ => return Err(RuntimeError::BadConstant { index }),
        };
        let function = RuntimeFn::from_hash(hash).ok_or(RuntimeError::UnknownRuntimeFunction {
            hash: hash.0,
        })?;
        if argc != function.arity() {
            return Err(RuntimeError::RuntimeArity {
                name: function.name(),
                expected: function.arity(),
                got: argc,
            });
        }

        let split = self
            .stack
            .len()
            .checked_sub(usize::from(argc))
            .ok_or(RuntimeError::StackUnderflow { offset: self.ip })?;
        let args = self.stack.split_off(split);
        let result = runtime::call(function, &args, self.line)?;
        self.stack.push(result);
        Ok(())
    }
}
