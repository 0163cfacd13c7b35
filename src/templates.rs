pub const SERVER_INDEX_JS: &str = include_str!("../templates/server/index.js");
pub const SERVER_CONFIG_JS: &str = include_str!("../templates/server/config.js");
pub const SERVER_ENV: &str = include_str!("../templates/server/env");
pub const TAILWIND_CONFIG_JS: &str = include_str!("../templates/client/tailwind.config.js");
pub const TAILWIND_INDEX_CSS: &str = include_str!("../templates/client/index.css");
pub const VITE_PROXY_CONFIG_JS: &str = include_str!("../templates/client/vite.config.js");
pub const PROJECT_README_MD: &str = include_str!("../templates/project_readme.md");
