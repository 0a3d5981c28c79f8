//! Product and category listing and reordering.

use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use ims_core::error::AppError;
use ims_core::traits::remote::RemoteCollection;
use ims_entity::{Category, Orderable, Product};
use ims_service::{AppContext, CollectionController, ReorderOutcome, ViewWindow};

/// Arguments shared by `products` and `categories`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive search text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Which collection to reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollectionKind {
    /// The product list
    Products,
    /// The category list
    Categories,
}

/// Arguments for `reorder`
#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Collection to reorder
    #[arg(value_enum)]
    pub collection: CollectionKind,
    /// Index to move from
    pub from: usize,
    /// Index to move to
    pub to: usize,
    /// Search text applied before moving
    #[arg(short, long)]
    pub search: Option<String>,
    /// Page shown before moving
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
    /// Treat indices as positions on the shown page instead of the full list
    #[arg(long)]
    pub view: bool,
}

/// Product display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ProductRow {
    /// Row on the page
    #[tabled(rename = "#")]
    row: usize,
    /// Product ID
    id: String,
    /// Name
    name: String,
    /// SKU
    sku: String,
    /// Price
    price: String,
    /// Stock
    stock: String,
    /// Position
    position: String,
}

/// Category display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Row on the page
    #[tabled(rename = "#")]
    row: usize,
    /// Category ID
    id: String,
    /// Name
    name: String,
    /// Position
    position: String,
}

fn product_rows(window: &ViewWindow<Product>) -> Vec<ProductRow> {
    window
        .items
        .iter()
        .enumerate()
        .map(|(row, p)| ProductRow {
            row,
            id: p.id.to_string(),
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            price: p.price.as_ref().map(|n| n.to_string()).unwrap_or_default(),
            stock: p.stock_quantity.map(|s| s.to_string()).unwrap_or_default(),
            position: display_position(p.position),
        })
        .collect()
}

fn category_rows(window: &ViewWindow<Category>) -> Vec<CategoryRow> {
    window
        .items
        .iter()
        .enumerate()
        .map(|(row, c)| CategoryRow {
            row,
            id: c.id.to_string(),
            name: c.name.clone(),
            position: display_position(c.position),
        })
        .collect()
}

fn display_position(position: Option<i64>) -> String {
    position.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_footer<T>(window: &ViewWindow<T>, format: OutputFormat) {
    if format == OutputFormat::Table {
        println!(
            "Page {}/{} ({} matching)",
            window.page, window.total_pages, window.total_matches
        );
    }
}

/// Load a controller and apply search and page
async fn prepare<T, R>(
    controller: &CollectionController<T, R>,
    search: Option<&str>,
    page: usize,
) -> Result<ViewWindow<T>, AppError>
where
    T: Orderable,
    R: RemoteCollection<T>,
{
    controller.refresh().await?;
    if let Some(search) = search {
        controller.set_search(search);
    }
    Ok(controller.set_page(page))
}

/// List products
pub async fn list_products(
    args: &ListArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let window = prepare(&ctx.products, args.search.as_deref(), args.page).await?;
    output::print_list(&product_rows(&window), format);
    print_footer(&window, format);
    Ok(())
}

/// List categories
pub async fn list_categories(
    args: &ListArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let window = prepare(&ctx.categories, args.search.as_deref(), args.page).await?;
    output::print_list(&category_rows(&window), format);
    print_footer(&window, format);
    Ok(())
}

/// Move one item and wait until the remote store answers
pub async fn reorder(
    args: &ReorderArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match args.collection {
        CollectionKind::Products => {
            run_reorder(&ctx.products, args).await?;
            let window = ctx.products.window();
            output::print_list(&product_rows(&window), format);
            print_footer(&window, format);
        }
        CollectionKind::Categories => {
            run_reorder(&ctx.categories, args).await?;
            let window = ctx.categories.window();
            output::print_list(&category_rows(&window), format);
            print_footer(&window, format);
        }
    }
    Ok(())
}

async fn run_reorder<T, R>(
    controller: &CollectionController<T, R>,
    args: &ReorderArgs,
) -> Result<(), AppError>
where
    T: Orderable,
    R: RemoteCollection<T>,
{
    prepare(controller, args.search.as_deref(), args.page).await?;
    let handle = if args.view {
        controller.reorder_in_view(args.from, args.to)?
    } else {
        controller.reorder(args.from, args.to)?
    };

    match handle.settled().await? {
        ReorderOutcome::Unchanged => output::print_warning("Nothing to move"),
        ReorderOutcome::Persisted => output::print_success("Order saved"),
        ReorderOutcome::RolledBack { message } => {
            return Err(AppError::remote(format!("Order restored: {message}")));
        }
        ReorderOutcome::Resynced { message } => {
            return Err(AppError::remote(format!("Order reloaded from server: {message}")));
        }
    }
    Ok(())
}
