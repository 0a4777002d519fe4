//! Example: Creating a plot from events
//!
//! This example builds a dataset directly from event values, without
//! parsing JSON rows, and renders it to SVG.

use chrono::{TimeZone, Utc};

use paoh::{PlotBuilder, dataset::Dataset, event::Event, identifier::ActorId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building dataset from events...\n");

    let ada = ActorId::new("Ada Lovelace");
    let charles = ActorId::new("Charles Babbage");
    let grace = ActorId::new("Grace Hopper");
    let mary = ActorId::new("Mary Somerville");

    let date = |y, m, d| {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .ok_or("invalid date")
    };

    let events = vec![
        Event::new("1842-A", date(2020, 1, 10)?, "Analytical Engine notes", [ada, charles]),
        Event::new("1842-B", date(2020, 1, 10)?, "Translation", [ada, mary]),
        Event::new("1944-A", date(2020, 3, 2)?, "Mark I programming", [grace]),
        Event::new("1952-A", date(2020, 6, 15)?, "A-0 compiler", [grace, charles]),
        Event::new("1834-A", date(2020, 8, 1)?, "Difference Engine", [charles]),
    ];
    let dataset = Dataset::from_events(events);

    let builder = PlotBuilder::default();
    let layout = builder.layout(&dataset)?;

    println!("Lane order:");
    for lane in layout.lanes() {
        let actor = lane.actor();
        println!(
            "  {:<18} connected={} y={:.1}",
            actor.id().name(),
            actor.is_connected(),
            lane.y()
        );
    }
    println!();

    println!("Rendering to SVG...");
    let svg = builder.render_svg(&dataset)?;
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_events_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
