use warmup_runtime::{PrintToStdout, Runtime, Step};
use crate::error::TaskExecutionError;
use crate::task::Task;

pub struct Run;

impl Task for Run {
    type Environment = Option<Step>;
    type Error = TaskExecutionError;

    fn execute(&self, environment: Self::Environment) -> Result<(), Self::Error> {
        let runtime = Runtime::create(PrintToStdout);
        match environment {
            Some(step) => runtime.run_step(step)?,
            None => {
                runtime.start()?;
            }
        }
        Ok(())
    }
}
