use agent_hub::agents::packages::{koshien_agent, test_agent};
use agent_hub::components::{build_component, ComponentKind, KnowledgeBase};
use agent_hub::{Agent, AgentKind, BotConfig, Payload, Processor, ProcessorConfig};
use serde_json::json;

#[test]
fn test_test_agent_package_wires_bot_to_database() {
    let database = test_agent::Database::new("x.db");
    let agent = test_agent::TestAgent::new(database);
    let bot = test_agent::create_bot(agent, BotConfig::default());

    assert_eq!(bot.kind(), AgentKind::Test);
    assert_eq!(bot.database().db_path(), "x.db");

    // echoes to stdout and returns unit
    bot.database().test_method("foo");
}

#[test]
fn test_each_package_has_its_own_default_database() {
    let koshien = koshien_agent::KoshienAgent::default();
    let test = test_agent::TestAgent::default();

    assert_eq!(koshien.database().db_path(), "koshien_agent.db");
    assert_eq!(test.database().db_path(), "test_agent.db");
}

#[test]
fn test_processors_hold_config_and_pass_payload_through() {
    let settings: serde_json::Map<String, serde_json::Value> =
        serde_json::from_value(json!({"index": "players", "top_k": 5})).unwrap();
    let config = ProcessorConfig::new(settings.clone());

    let kb = KnowledgeBase::new(Some(config.clone()));
    assert_eq!(kb.config(), &config);
    assert_eq!(kb.config().as_map(), &settings);

    let payload: Payload = serde_json::from_value(json!({
        "question": "今日の先発は?",
        "context": {"team": "Hawks"}
    }))
    .unwrap();

    for kind in ComponentKind::ALL {
        let processor = build_component(kind, Some(config.clone()));
        assert_eq!(processor.config(), &config);
        assert_eq!(processor.process(payload.clone()), payload);
    }
}
