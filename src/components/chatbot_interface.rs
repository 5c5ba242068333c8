use crate::processor::stub_processor;

stub_processor!(
    /// Knowledge lookup for chatbot replies. Placeholder: passes payloads through.
    KnowledgeBase,
    "knowledge_base"
);

stub_processor!(
    /// Reply generation for chatbot turns. Placeholder: passes payloads through.
    ResponseGenerator,
    "response_generator"
);
