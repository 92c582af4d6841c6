#[cfg(feature = "lambda")]
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
#[cfg(feature = "lambda")]
use tripwise_gateway::utils::logger;
#[cfg(feature = "lambda")]
use tripwise_gateway::{ApiRequest, ApiResponse, Gateway, GatewayConfig, ResponseBody};

#[cfg(feature = "lambda")]
fn to_api_request(event: &Request) -> ApiRequest {
    let mut params = std::collections::HashMap::new();
    for (key, value) in event.query_string_parameters().iter() {
        params.insert(key.to_string(), value.to_string());
    }

    ApiRequest {
        method: event.method().as_str().to_string(),
        path: event.uri().path().to_string(),
        params,
    }
}

#[cfg(feature = "lambda")]
fn to_lambda_response(response: ApiResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = match response.body {
        ResponseBody::Json(value) => Body::Text(value.to_string()),
        ResponseBody::Binary(bytes) => Body::Binary(bytes),
        ResponseBody::Empty => Body::Empty,
    };

    Ok(builder.body(body)?)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Built once per process; invocations only borrow it.
    let config = GatewayConfig::from_env()?;
    let gateway = Gateway::new(&config)?;
    let gateway = &gateway;

    run(service_fn(move |event: Request| async move {
        let request = to_api_request(&event);
        tracing::info!("{} {}", request.method, request.path);
        to_lambda_response(gateway.handle(&request).await)
    }))
    .await
}
