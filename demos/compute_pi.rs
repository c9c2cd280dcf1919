// ============================================================================
// Compute Pi Example
// Prints the fractional hex limbs of pi, four groups per line
// ============================================================================

use machin_pi::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let handler: Arc<dyn EventHandler> = if cfg!(feature = "logging") {
        Arc::new(LoggingEventHandler)
    } else {
        Arc::new(NoOpEventHandler)
    };

    let engine = match PiEngineBuilder::standard().build(handler) {
        Ok(engine) => engine,
        Err(reason) => {
            eprintln!("invalid configuration: {}", reason);
            std::process::exit(1);
        },
    };

    match engine.compute() {
        Ok(pi) => println!("{}", pi.hex()),
        Err(err) => {
            eprintln!("computation failed: {}", err);
            std::process::exit(1);
        },
    }
}
