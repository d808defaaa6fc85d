//! Error type for the pipeline's boundary operations

#[derive(Debug)]
pub enum RankingError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for RankingError {
    fn from(err: std::io::Error) -> Self {
        RankingError::Io(err)
    }
}

impl From<serde_json::Error> for RankingError {
    fn from(err: serde_json::Error) -> Self {
        RankingError::Json(err)
    }
}

impl std::fmt::Display for RankingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingError::Io(e) => write!(f, "IO error: {}", e),
            RankingError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for RankingError {}
