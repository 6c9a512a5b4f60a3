#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

pub mod arith;
pub mod display;
pub mod script;
pub mod value;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter};
use std::io::Write;
use strum::IntoEnumIterator;
use thiserror::Error;
use crate::arith::ArithmeticError;

pub use crate::display::{DisplayTuple, List};
pub use crate::script::Step;
pub use crate::value::Value;

/// Arguments of a single print call, joined by one space.
pub struct PrintArgs<'a>(pub &'a [&'a dyn Display]);

impl Display for PrintArgs<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut args = self.0.iter();
        if let Some(first) = args.next() {
            write!(f, "{first}")?;
        }
        for arg in args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub trait OutputAccumulator: Debug {
    fn output(&mut self, line: String) -> std::io::Result<()>;

    fn acc(&self) -> Option<Vec<String>>;
}

#[derive(Debug)]
pub struct PrintToStdout;

impl OutputAccumulator for PrintToStdout {
    fn output(&mut self, line: String) -> std::io::Result<()> {
        writeln!(std::io::stdout().lock(), "{line}")
    }

    fn acc(&self) -> Option<Vec<String>> {
        None
    }
}

#[derive(Default, Debug)]
pub struct Accumulate(Vec<String>);

impl OutputAccumulator for Accumulate {
    fn output(&mut self, line: String) -> std::io::Result<()> {
        self.0.push(line);
        Ok(())
    }

    fn acc(&self) -> Option<Vec<String>> {
        Some(self.0.clone())
    }
}

#[derive(Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum RuntimeError {
    #[error("{0}")]
    Arithmetic(#[from] ArithmeticError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct Runtime {
    o: Box<RefCell<dyn OutputAccumulator>>,
}

impl Runtime {
    pub fn create<T: OutputAccumulator + 'static>(t: T) -> Self {
        let o = Box::new(RefCell::new(t));
        Self {
            o
        }
    }

    /// Runs every step in order and hands back the sink.
    pub fn start(&self) -> Result<&RefCell<dyn OutputAccumulator>, RuntimeError> {
        for step in Step::iter() {
            self.run_step(step)?;
        }

        Ok(self.output())
    }

    pub fn output(&self) -> &RefCell<dyn OutputAccumulator> {
        &self.o
    }

    pub fn print(&self, args: &[&dyn Display]) -> Result<(), RuntimeError> {
        let line = PrintArgs(args).to_string();
        self.o.borrow_mut().output(line)?;
        Ok(())
    }
}
