use crate::api;
use anyhow::{anyhow, Context, Result};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the DSN is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let dsn = Url::parse(&args.dsn).context("Invalid database connection string")?;

    if !matches!(dsn.scheme(), "postgres" | "postgresql") {
        return Err(anyhow!(
            "Database connection string must use the postgres:// scheme, got: {}",
            dsn.scheme()
        ));
    }

    api::new(args.port, dsn.to_string()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_malformed_dsn() {
        let result = execute(Args {
            port: 8080,
            dsn: "not a url".to_string(),
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_non_postgres_scheme() {
        let result = execute(Args {
            port: 8080,
            dsn: "mysql://user@localhost:3306/librarium".to_string(),
        })
        .await;
        let err = result.expect_err("mysql scheme should be rejected");
        assert!(err.to_string().contains("postgres://"));
    }
}
