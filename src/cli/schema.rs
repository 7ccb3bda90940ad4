use postboard::error::Result;
use postboard::store::MemoryPostStore;
use std::sync::Arc;

/// Print the GraphQL schema definition
pub fn run(output: Option<String>) -> Result<()> {
    // The SDL does not depend on the store, so no database is opened here
    let sdl = postboard::schema::build_schema(Arc::new(MemoryPostStore::new())).sdl();

    if let Some(output_path) = output {
        std::fs::write(&output_path, sdl)?;
        tracing::info!("📝 Wrote schema to {}", output_path);
    } else {
        println!("{}", sdl);
    }

    Ok(())
}
