const ENV_STORE_URL: &str = "STORE_URL";
const ENV_STORE_KEY: &str = "STORE_KEY";
const ENV_ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Where the record store lives and what gates mutations. Read once per
/// operation from the process environment; never user-editable at runtime.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub admin_password: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            base_url: require_env(ENV_STORE_URL)?,
            api_key: require_env(ENV_STORE_KEY)?,
            admin_password: require_env(ENV_ADMIN_PASSWORD)?,
        })
    }
}

fn require_env(name: &str) -> Result<String, String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("缺少環境變數 {}", name))
}
