pub mod fixtures {
    use bevy::prelude::*;

    use crate::backdrop::registry::TileRegistry;

    /// Minimal headless app with the shared tile registry for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<TileRegistry>();
        app
    }
}
