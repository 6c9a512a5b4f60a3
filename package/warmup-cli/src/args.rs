use clap::{Parser, Subcommand};
use warmup_runtime::Step;
use crate::error::TaskExecutionError;
use crate::task::run::Run;
use crate::task::test::Test;
use crate::task::Task;

#[derive(Parser)]
pub struct Args {
    #[clap(subcommand)]
    sub_command: SubCom
}

impl Args {
    pub fn execute(self) -> Result<(), TaskExecutionError> {
        match self.sub_command {
            SubCom::Run { step } => {
                let task = Run;
                task.execute(step)?;
                Ok(())
            }
            SubCom::Test => {
                let task = Test;
                task.execute(())?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand)]
pub enum SubCom {
    /// Prints the exercise transcript to stdout.
    Run {
        /// Runs only the named step, e.g. `floor_division`.
        #[clap(long)]
        step: Option<Step>,
    },
    /// Compares a buffered run against the expected transcript.
    Test
}
