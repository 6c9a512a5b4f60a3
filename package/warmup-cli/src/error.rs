use thiserror::Error;
use warmup_runtime::RuntimeError;
use crate::task::test::TestFailureCause;

#[derive(Error, Debug)]
#[expect(clippy::module_name_repetitions)]
pub enum TaskExecutionError {
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
    #[error("self-check failed: {0}")]
    Test(#[from] TestFailureCause),
}
