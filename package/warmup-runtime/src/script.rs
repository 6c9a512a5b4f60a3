use log::debug;
use strum::{AsRefStr, EnumIter, EnumString};
use crate::arith::BinaryOperatorKind;
use crate::display::{DisplayTuple, List};
use crate::value::concatenate;
use crate::{values, Runtime, RuntimeError};

pub const GREETING: &str = "Hello World! I wonder why that is always the default coding text to start with";

pub const TRANSCRIPT: [&str; 9] = [
    GREETING,
    "2 + 3 = 5",
    "20 - 10 = 10",
    "2 * 3 = 6",
    "20 / 10 = 2",
    "John Doe",
    "[1, 'John', 8, 'a']",
    "[1, 'John', 8, 'a', 9]",
    "(1, 'a', 2, 'b')",
];

#[derive(EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Step {
    Greeting,
    Addition,
    Subtraction,
    Multiplication,
    FloorDivision,
    Concatenation,
    List,
    Tuple,
}

impl Step {
    /// Lines this step writes, as a slice of [`TRANSCRIPT`].
    #[must_use]
    pub fn expected_output(self) -> &'static [&'static str] {
        let range = match self {
            Self::Greeting => 0..1,
            Self::Addition => 1..2,
            Self::Subtraction => 2..3,
            Self::Multiplication => 3..4,
            Self::FloorDivision => 4..5,
            Self::Concatenation => 5..6,
            Self::List => 6..8,
            Self::Tuple => 8..9,
        };

        &TRANSCRIPT[range]
    }
}

impl Runtime {
    pub fn run_step(&self, step: Step) -> Result<(), RuntimeError> {
        debug!("step: {step}", step = step.as_ref());

        match step {
            Step::Greeting => self.print(&[&GREETING]),
            Step::Addition => {
                let x = 2;
                let y = 3;
                self.print_binary_operation(x, BinaryOperatorKind::Plus, y)
            }
            Step::Subtraction => {
                let a = 10;
                let b = 20;
                self.print_binary_operation(b, BinaryOperatorKind::Minus, a)
            }
            Step::Multiplication => {
                let x = 2;
                let y = 3;
                self.print_binary_operation(x, BinaryOperatorKind::Multiply, y)
            }
            Step::FloorDivision => {
                let a = 10;
                let b = 20;
                self.print_binary_operation(b, BinaryOperatorKind::FloorDivide, a)
            }
            Step::Concatenation => {
                let first_name = "John ".to_string();
                let last_name = "Doe";
                let name = concatenate(first_name, last_name);
                self.print(&[&name])
            }
            Step::List => {
                let mut list = List::from(values![1 => Integer, "John" => Text, 8 => Integer, "a" => Text]);
                self.print(&[&list])?;
                list.append(9_i64);
                self.print(&[&list])
            }
            Step::Tuple => {
                let t: (i64, &str, i64, &str) = (1, "a", 2, "b");
                self.print(&[&DisplayTuple(t)])
            }
        }
    }

    fn print_binary_operation(&self, lhs: i64, operator: BinaryOperatorKind, rhs: i64) -> Result<(), RuntimeError> {
        let result = operator.apply(lhs, rhs)?;
        self.print(&[&lhs, &operator, &rhs, &"=", &result])
    }
}
