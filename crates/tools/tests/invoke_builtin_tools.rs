use std::sync::Arc;

use first_agent_core::tool::{
    ErrorKind, InvocationRequest, InvocationResult, Invoker, Registry,
    SemanticType,
};
use first_agent_tools::*;
use serde_json::{Value, json};

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(WeatherTool::new()).unwrap();
    registry.register(CurrentTimeTool::new()).unwrap();
    registry.register(StatisticsTool::new()).unwrap();
    registry.register(StockPriceTool::new()).unwrap();
    registry.register(NewsHeadlinesTool::new()).unwrap();
    registry.register(TipTool::new()).unwrap();
    registry.register(TemperatureTool::new()).unwrap();
    registry.register(TextAnalysisTool::new()).unwrap();
    registry.register(RecommendationTool::new()).unwrap();
    registry
}

fn invoker() -> Invoker {
    Invoker::new(Arc::new(registry()))
}

fn request(name: &str, arguments: Value) -> InvocationRequest {
    InvocationRequest::new(name, arguments.as_object().cloned().unwrap())
}

fn payload(result: InvocationResult) -> Value {
    match result {
        InvocationResult::Success { payload } => Value::Object(payload),
        InvocationResult::Failure { kind, message } => {
            panic!("unexpected failure: {kind:?}: {message}")
        }
    }
}

#[test]
fn test_statistics() {
    let invoker = invoker();

    let result =
        invoker.invoke(&request("calculate_statistics", json!({"numbers": [1, 2, 3, 4, 5]})));
    assert_eq!(
        payload(result),
        json!({"mean": 3.0, "median": 3.0, "min": 1.0, "max": 5.0, "count": 5})
    );

    let result = invoker
        .invoke(&request("calculate_statistics", json!({"numbers": [10, 20, 30, 40]})));
    assert_eq!(
        payload(result),
        json!({"mean": 25.0, "median": 25.0, "min": 10.0, "max": 40.0, "count": 4})
    );
}

#[test]
fn test_statistics_is_pure() {
    let invoker = invoker();
    let req = request("calculate_statistics", json!({"numbers": [0.3, 0.1, 0.2]}));
    let first = serde_json::to_string(&invoker.invoke(&req)).unwrap();
    let second = serde_json::to_string(&invoker.invoke(&req)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_statistics_rejects_bad_input() {
    let invoker = invoker();

    let result =
        invoker.invoke(&request("calculate_statistics", json!({"numbers": []})));
    assert_eq!(result.error_kind(), Some(ErrorKind::InvalidInput));

    let result = invoker
        .invoke(&request("calculate_statistics", json!({"numbers": [1, "two", 3]})));
    let InvocationResult::Failure { kind, message } = result else {
        panic!("expected a failure");
    };
    assert_eq!(kind, ErrorKind::InvalidInput);
    assert!(message.contains("`numbers[1]`"), "{message}");

    let result = invoker.invoke(&request("calculate_statistics", json!({})));
    assert_eq!(result.error_kind(), Some(ErrorKind::InvalidInput));
}

#[test]
fn test_statistics_of_huge_values() {
    let invoker = invoker();

    let result =
        invoker.invoke(&request("calculate_statistics", json!({"numbers": [1e307]})));
    assert_eq!(
        payload(result),
        json!({"mean": 1e307, "median": 1e307, "min": 1e307, "max": 1e307, "count": 1})
    );

    let result = invoker
        .invoke(&request("calculate_statistics", json!({"numbers": [1e308, 1e308]})));
    assert_eq!(
        payload(result),
        json!({"mean": 1e308, "median": 1e308, "min": 1e308, "max": 1e308, "count": 2})
    );
}

#[test]
fn test_null_optional_arguments_take_defaults() {
    let invoker = invoker();

    let news = payload(invoker.invoke(&request(
        "get_news_headlines",
        json!({"topic": "sports", "num_headlines": null}),
    )));
    assert_eq!(news["headlines"].as_array().unwrap().len(), 3);

    let recommendation = payload(invoker.invoke(&request(
        "make_recommendation",
        json!({"category": "book", "preferences": null}),
    )));
    assert_eq!(recommendation["name"], "Project Hail Mary");
    assert!(recommendation.get("preferences").is_none());

    let tip = payload(invoker.invoke(&request(
        "calculate_tip",
        json!({"bill_amount": 100, "tip_percentage": null}),
    )));
    assert_eq!(tip["tip_percentage"], 15.0);
}

#[test]
fn test_out_of_range_integer_names_parameter() {
    let result = invoker().invoke(&request(
        "get_news_headlines",
        json!({"topic": "sports", "num_headlines": -1}),
    ));
    let InvocationResult::Failure { kind, message } = result else {
        panic!("expected a failure");
    };
    assert_eq!(kind, ErrorKind::InvalidInput);
    assert!(message.contains("`num_headlines`"), "{message}");
}

#[test]
fn test_unknown_tool() {
    let result = invoker().invoke(&request("get_wether", json!({"city": "SF"})));
    assert_eq!(result.error_kind(), Some(ErrorKind::NotFound));
}

#[test]
fn test_tool_failure_passes_through() {
    let result =
        invoker().invoke(&request("get_current_time", json!({"city": "Atlantis"})));
    assert_eq!(
        result,
        InvocationResult::Failure {
            kind: ErrorKind::InvalidInput,
            message: "Sorry, I don't have timezone information for Atlantis."
                .to_owned(),
        }
    );
}

#[test]
fn test_defaults_and_enums() {
    let invoker = invoker();

    let news = payload(invoker.invoke(&request("get_news_headlines", json!({"topic": "sports"}))));
    assert_eq!(news["headlines"].as_array().unwrap().len(), 3);

    let tip = payload(invoker.invoke(&request("calculate_tip", json!({"bill_amount": 100}))));
    assert_eq!(tip["total_amount"], 115.0);

    let converted = payload(invoker.invoke(&request(
        "convert_temperature",
        json!({"value": 0, "from_unit": "C", "to_unit": "F"}),
    )));
    assert_eq!(converted["result"], 32.0);
    assert_eq!(converted["to_unit"], "F");

    let result = invoker.invoke(&request(
        "convert_temperature",
        json!({"value": 0, "from_unit": "Celsius", "to_unit": "F"}),
    ));
    let InvocationResult::Failure { kind, message } = result else {
        panic!("expected a failure");
    };
    assert_eq!(kind, ErrorKind::InvalidInput);
    assert!(message.contains("`from_unit`"), "{message}");

    let recommendation =
        payload(invoker.invoke(&request("make_recommendation", json!({"category": "book"}))));
    assert!(recommendation.get("preferences").is_none());
}

#[test]
fn test_listed_specs() {
    let registry = registry();
    let names: Vec<_> = registry.list().iter().map(|spec| spec.name()).collect();
    assert_eq!(
        names,
        [
            "get_weather",
            "get_current_time",
            "calculate_statistics",
            "get_stock_price",
            "get_news_headlines",
            "calculate_tip",
            "convert_temperature",
            "analyze_text",
            "make_recommendation",
        ]
    );

    let statistics = registry.resolve("calculate_statistics").unwrap();
    let spec = statistics.spec();
    assert_eq!(spec.parameters().len(), 1);
    assert_eq!(
        spec.parameters()[0].ty,
        SemanticType::Array(Box::new(SemanticType::Number))
    );
    let outputs: Vec<_> = spec.outputs().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(outputs, ["mean", "median", "min", "max", "count"]);

    let news = registry.resolve("get_news_headlines").unwrap();
    let num_headlines = &news.spec().parameters()[1];
    assert_eq!(num_headlines.name, "num_headlines");
    assert!(matches!(
        num_headlines.ty,
        SemanticType::Integer { minimum: Some(0), .. }
    ));
    assert!(!num_headlines.required);
    assert_eq!(num_headlines.default, Some(json!(3)));

    let output_names = |name: &str| -> Vec<String> {
        let tool = registry.resolve(name).unwrap();
        tool.spec().outputs().iter().map(|f| f.name.clone()).collect()
    };
    assert_eq!(output_names("get_stock_price"), ["symbol", "price", "currency"]);
    assert_eq!(
        output_names("get_news_headlines"),
        ["topic", "category", "headlines"]
    );

    let temperature = registry.resolve("convert_temperature").unwrap();
    assert_eq!(
        temperature.spec().parameters()[1].ty,
        SemanticType::Enum(vec!["C".to_owned(), "F".to_owned(), "K".to_owned()])
    );
}

#[tokio::test]
async fn test_invoke_all() {
    let results = invoker()
        .invoke_all(vec![
            request("get_weather", json!({"city": "San Francisco"})),
            request("get_stock_price", json!({"symbol": "msft"})),
            request("calculate_statistics", json!({"numbers": []})),
        ])
        .await;

    assert_eq!(
        payload(results[0].clone())["report"],
        "It's 60 degrees and foggy."
    );
    assert_eq!(payload(results[1].clone())["price"], 380.2);
    assert_eq!(payload(results[1].clone())["currency"], "USD");
    assert_eq!(results[2].error_kind(), Some(ErrorKind::InvalidInput));
}
