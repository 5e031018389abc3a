use std::io;

use clap::Args;
use meltmunch::{
    catalog::Catalog,
    products::{Product, Variants},
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::{cli::source::SourceArgs, errors::CliError};

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Only list products in this category
    #[arg(long)]
    category: Option<String>,

    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

pub(crate) async fn run(args: CatalogArgs, out: impl io::Write) -> Result<(), CliError> {
    let catalog = args.source.load().await?;

    write_catalog(out, &catalog, args.category.as_deref())
}

fn variants_cell(variants: &Variants) -> String {
    variants
        .iter()
        .map(|variant| format!("{} ({})", variant.name, variant.price))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_product_row(builder: &mut Builder, product: &Product) {
    builder.push_record([
        product.id.to_string(),
        product.name.clone(),
        product.category.trim().to_string(),
        product.price.to_string(),
        variants_cell(&product.variants),
    ]);
}

fn write_catalog(
    mut out: impl io::Write,
    catalog: &Catalog,
    category: Option<&str>,
) -> Result<(), CliError> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price", "Variants"]);

    let products: Box<dyn Iterator<Item = &Product>> = match category {
        Some(category) => Box::new(catalog.filter_by_category(category)),
        None => Box::new(catalog.products().iter()),
    };

    for product in products {
        push_product_row(&mut builder, product);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "{} active promo banner(s)", catalog.banners().len())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use meltmunch::fixtures::parse_catalog;
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r"
products:
  - id: 1
    name: Siomay
    price: 15000
    category: Makanan Asin
  - id: 2
    name: Bakpao
    price: 12000
    category: Makanan Manis
    variants:
      - { id: 10, name: Coklat, price: 12000 }
      - { id: 11, name: Keju, price: 14000 }
banners:
  - image_url: /promo.jpg
";

    #[test]
    fn lists_every_product_with_variants() -> TestResult {
        let catalog = parse_catalog(CATALOG)?;
        let mut out = Vec::new();

        write_catalog(&mut out, &catalog, None)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Siomay"));
        assert!(text.contains("Rp 15.000"));
        assert!(text.contains("Coklat (Rp 12.000), Keju (Rp 14.000)"));
        assert!(text.ends_with("1 active promo banner(s)\n"));

        Ok(())
    }

    #[test]
    fn category_filter_limits_rows() -> TestResult {
        let catalog = parse_catalog(CATALOG)?;
        let mut out = Vec::new();

        write_catalog(&mut out, &catalog, Some(" makanan manis "))?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Bakpao"));
        assert!(!text.contains("Siomay"));

        Ok(())
    }
}
