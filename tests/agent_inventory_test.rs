use std::fs;

use agent_hub::agents::AgentKind;
use agent_hub::inventory::{render_inventory, scan_agents};
use tempfile::tempdir;

#[test]
fn test_scan_lists_all_twelve_packages_in_order() {
    let root = tempdir().unwrap();
    let agents_dir = root.path().join("agents");
    fs::create_dir(&agents_dir).unwrap();

    // create in reverse so the listing has to sort
    for kind in AgentKind::ALL.iter().rev() {
        let package = agents_dir.join(kind.dir_name());
        fs::create_dir(&package).unwrap();
        fs::write(package.join("__init__.py"), "").unwrap();
    }
    fs::write(agents_dir.join("__init__.py"), "").unwrap();

    let names = scan_agents(&agents_dir).unwrap();
    let expected: Vec<String> = AgentKind::ALL.iter().map(|k| k.dir_name().to_string()).collect();
    assert_eq!(names, expected);

    let mut out = Vec::new();
    render_inventory(&names, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().skip(1).collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "1. baseball_stats_agent");
    assert_eq!(lines[10], "11. test_agent");
    assert_eq!(lines[11], "12. tournament_agent");
}
