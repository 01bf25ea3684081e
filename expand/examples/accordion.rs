use std::fs::File;

use expand::{dispatch_dynamic_resize, ExpandBinder, ExpandConfig, Node, Window};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Two accordion sections bound to the same window. One is open, one is closed.
fn main() -> std::io::Result<()> {
    let log_file = File::create("accordion.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let window = Window::new();
    let details = Node::new("details").with_heights(120, 120);
    let history = Node::new("history").with_heights(0, 340);

    let mut details_binder =
        ExpandBinder::with_config(window.clone(), ExpandConfig::new("details"));
    let mut history_binder =
        ExpandBinder::with_config(window.clone(), ExpandConfig::new("history"));

    let mut history_open = false;
    details_binder.bind(Some(details.clone()), Some("details"), &[true]);
    history_binder.bind(Some(history.clone()), Some("history"), &[history_open]);

    // Content grows inside the open section
    details.set_scroll_height(180);
    dispatch_dynamic_resize(&window, Some("details"));
    report(&details, &history);

    // Viewport shrinks; text reflows in both sections
    details.set_scroll_height(260);
    history.set_scroll_height(410);
    window.resize(480, 800);
    report(&details, &history);

    // Open the history section and rebind on the new state
    history_open = true;
    history.set_offset_height(410);
    history_binder.bind(Some(history.clone()), Some("history"), &[history_open]);
    dispatch_dynamic_resize(&window, None);
    report(&details, &history);

    Ok(())
}

fn report(details: &Node, history: &Node) {
    for node in [details, history] {
        println!(
            "{:>8}: max-height {}",
            node.id(),
            node.style().max_height_css().unwrap_or_else(|| "unset".to_string())
        );
    }
    println!();
}
