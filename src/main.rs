use request_worker::{Config, HeaderParameters, RequestWorker, ResponseExt, Result, WorkerError};
use serde::Serialize;
use std::error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct StdRequest {
    std_data: StdData,
}

#[derive(Serialize)]
struct StdData {
    parameter: serde_json::Map<String, serde_json::Value>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "request_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let worker = RequestWorker::new();

    // The blocking client must run outside any async runtime.
    if let Err(e) = send_get(&worker, &config.get_url) {
        report(&e);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return;
        }
    };
    if let Err(e) = runtime.block_on(send_post(&worker, &config.post_url)) {
        report(&e);
    }

    println!("Send out.");
}

fn send_get(worker: &RequestWorker, url: &str) -> Result<()> {
    println!("Send get request, url={}", url);

    let mut headers = HeaderParameters::new();
    headers.insert(
        "my-sample-header".to_string(),
        "Lorem ipsum dolor sit amet".to_string(),
    );

    let tree = worker.get(url, Some(&headers))?.as_json_tree()?;
    let pretty = serde_json::to_string_pretty(&tree).map_err(WorkerError::Serialize)?;
    println!("response:\n{}", pretty);
    Ok(())
}

async fn send_post(worker: &RequestWorker, url: &str) -> Result<()> {
    println!("Send post request, url={}", url);

    let mut headers = HeaderParameters::new();
    headers.insert("digi-protocol".to_string(), "raw".to_string());
    headers.insert("digi-type".to_string(), "sync".to_string());
    headers.insert(
        "digi-host".to_string(),
        r#"{"ver":"5.7","prod":"DOP","timezone":" + 8","ip":"10.20.9.19","id":"","lang":"zh_CN","acct":"dcms","timestamp":"2018071990007275"}"#.to_string(),
    );
    headers.insert(
        "digi-service".to_string(),
        r#"{"prod":"E10","ip":"127.0.0.1","name":"e10.getIssueTreeApis","id":"E0_6.0_NJ"}"#.to_string(),
    );

    let body = StdRequest {
        std_data: StdData {
            parameter: serde_json::Map::new(),
        },
    };

    let response = worker.post_async(url, Some(&body), Some(&headers)).await?;
    println!("response:\n{}", response.as_text());
    Ok(())
}

fn report(error: &WorkerError) {
    println!("[{}] {}", error.code(), error);
    let mut source = error.source();
    while let Some(cause) = source {
        println!("  caused by: {}", cause);
        source = cause.source();
    }
    println!("{:?}", error);
}
