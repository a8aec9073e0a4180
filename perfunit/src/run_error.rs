use crate::exit_codes::ExitCode;

#[derive(Debug)]
pub enum RunError {
    InputNotFound(anyhow::Error),
    WriteFailure(anyhow::Error),
    RuntimeError(anyhow::Error),
}

impl RunError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InputNotFound(_) => ExitCode::InputNotFound,
            Self::WriteFailure(_) => ExitCode::WriteFailure,
            Self::RuntimeError(_) => ExitCode::RuntimeError,
        }
    }

    #[must_use]
    pub fn anyhow(&self) -> &anyhow::Error {
        match self {
            Self::InputNotFound(e) | Self::WriteFailure(e) | Self::RuntimeError(e) => e,
        }
    }
}

impl From<perfunit_core::Error> for RunError {
    fn from(err: perfunit_core::Error) -> Self {
        if err.is_not_found() {
            return Self::InputNotFound(err.into());
        }
        match err {
            perfunit_core::Error::WriteFailure { .. } => Self::WriteFailure(err.into()),
            _ => Self::RuntimeError(err.into()),
        }
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.anyhow())
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.anyhow().as_ref())
    }
}
