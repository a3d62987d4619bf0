use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("runner error")]
    Runner(#[from] RunnerError),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("config error: {0}")]
    Config(anyhow::Error),

    #[error("empty command")]
    EmptyCommand,

    #[error("spawn failed: {0}")]
    Spawn(String),

    #[error("wait failed: {0}")]
    Wait(String),

    #[error("io error on {stream}")]
    StreamIo {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },
}
