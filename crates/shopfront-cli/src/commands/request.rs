use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;
use shopfront_core::ClientConfig;
use shopfront_interaction::RequestOptions;

#[derive(Args)]
pub struct RequestArgs {
    /// HTTP verb: GET, POST, PUT or DELETE
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Path relative to the API base URL, e.g. /products
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query")]
    pub query: Vec<String>,

    /// JSON request body for POST/PUT
    #[arg(short, long)]
    pub data: Option<String>,

    /// Bearer token to attach
    #[arg(long, env = "SHOPFRONT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

pub async fn run(config: ClientConfig, args: RequestArgs) -> Result<()> {
    let client = super::build_client(config, args.token.as_deref())?;

    let mut options = RequestOptions::new();
    for pair in &args.query {
        let (key, value) = parse_query_pair(pair)?;
        options = options.query(key, value);
    }

    let body: Option<Value> = args
        .data
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .context("--data is not valid JSON")?;

    let data: Value = match args.method.to_ascii_uppercase().as_str() {
        "GET" => client.get(&args.path, options).await?,
        "DELETE" => client.delete(&args.path, options).await?,
        "POST" => client.post(&args.path, body.as_ref(), options).await?,
        "PUT" => client.put(&args.path, body.as_ref(), options).await?,
        other => bail!("Unsupported method: {}", other),
    };

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn parse_query_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .with_context(|| format!("Query parameter must be key=value, got '{}'", pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pair() {
        assert_eq!(parse_query_pair("page=2").unwrap(), ("page", "2"));
        assert_eq!(parse_query_pair("q=a=b").unwrap(), ("q", "a=b"));
        assert_eq!(parse_query_pair("empty=").unwrap(), ("empty", ""));
        assert!(parse_query_pair("novalue").is_err());
        assert!(parse_query_pair("=x").is_err());
    }
}
