use selam_config::Config;

use crate::catalog::build_catalog;

pub fn run(config: &Config, learning: &str, topic: Option<&str>) -> anyhow::Result<()> {
    let catalog = build_catalog(config);

    let Some(provider) = catalog.provider(learning) else {
        println!("No vocabulary registered for {learning}");
        return Ok(());
    };

    match topic {
        Some(topic) => {
            let entries = provider.entries(topic);
            if entries.is_empty() {
                println!("No entries for topic {topic}");
            }
            for entry in entries {
                println!("{}\t{}", entry.native, entry.learning);
            }
        }
        None => {
            for topic in provider.topics() {
                println!("{topic}: {} entries", provider.entries(topic).len());
            }
        }
    }

    Ok(())
}
