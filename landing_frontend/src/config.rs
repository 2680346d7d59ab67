/// Backend locations baked in at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig<'a> {
    pub prod_url: Option<&'a str>,
    pub dev_url: Option<&'a str>,
    pub is_production: bool,
}

impl ApiConfig<'static> {
    /// Configuration of the running binary: `API_URL` and `API_DEV_URL` at
    /// compile time, release builds are considered production.
    pub const BUILD: ApiConfig<'static> = ApiConfig {
        prod_url: option_env!("API_URL"),
        dev_url: option_env!("API_DEV_URL"),
        is_production: !cfg!(debug_assertions),
    };
}

impl ApiConfig<'_> {
    /// Picks the API base URL for the current build mode, falling back to the
    /// other environment's URL. Returns `None` if neither is usable.
    pub fn resolve(&self) -> Option<String> {
        let prod_url = non_blank(self.prod_url);
        let dev_url = non_blank(self.dev_url);

        let url = if self.is_production {
            prod_url.or(dev_url)
        } else {
            dev_url.or(prod_url)
        };

        url.map(ToOwned::to_owned)
    }
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|url| !url.is_empty())
}
