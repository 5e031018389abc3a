use std::path::PathBuf;

use clap::Args;
use meltmunch::{catalog::Catalog, fixtures};
use meltmunch_store::{PostgrestCatalogStore, StoreConfig, load_catalog};
use tracing::info;

use crate::errors::CliError;

/// Where the catalog comes from.
#[derive(Debug, Args)]
pub(crate) struct SourceArgs {
    /// Read the catalog from a YAML fixture instead of the store
    #[arg(long)]
    pub(crate) fixture: Option<PathBuf>,

    /// Catalog store settings.
    #[command(flatten)]
    pub(crate) store: Option<StoreConfig>,
}

impl SourceArgs {
    /// Load the catalog, preferring the fixture file when one is given.
    pub(crate) async fn load(self) -> Result<Catalog, CliError> {
        if let Some(path) = self.fixture {
            info!(path = %path.display(), "loading catalog fixture");

            return Ok(fixtures::load_catalog(path)?);
        }

        let Some(store) = self.store else {
            return Err(CliError::NoCatalogSource);
        };

        info!(url = %store.store_url, "loading catalog from store");

        Ok(load_catalog(&PostgrestCatalogStore::new(store)).await)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn fixture_takes_precedence() -> TestResult {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(
            file.path(),
            "products:\n  - { id: 1, name: Siomay, price: 15000, category: Makanan Asin }\n",
        )?;

        let source = SourceArgs {
            fixture: Some(file.path().to_path_buf()),
            store: Some(StoreConfig::new("http://127.0.0.1:9", "key")),
        };

        let catalog = source.load().await?;

        assert_eq!(catalog.products().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn missing_source_is_an_error() {
        let source = SourceArgs {
            fixture: None,
            store: None,
        };

        assert!(matches!(
            source.load().await,
            Err(CliError::NoCatalogSource)
        ));
    }
}
