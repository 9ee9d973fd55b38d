use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Directory holding favicon and OG card assets served under /favico
    #[serde(default = "default_favicon_dir")]
    pub favicon_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            favicon_dir: default_favicon_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_favicon_dir() -> String {
    "public/favico".to_string()
}
