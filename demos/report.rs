use json_event_logger::get_logger;
use std::collections::BTreeMap;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let logger = get_logger("report-service");

    let mut stats = BTreeMap::new();
    stats.insert("numberSold", "0");

    logger
        .trace()
        .category("My category")
        .message("Report executed")
        .map("someStats", stats)
        .list("customers", ["Acme", "Sun"])
        .field("year", "2016")
        .log();

    // The supplier below only runs because ERROR is enabled.
    logger
        .error()
        .category_with(|| "Something expensive".to_string())
        .log();
}
