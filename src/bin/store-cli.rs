use clap::{Args, Parser, Subcommand};
use fake_store_facade::Product;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "store-cli")]
#[command(about = "Command-line client for the product facade", long_about = None)]
struct Cli {
    /// Facade base URL, including the API prefix.
    #[arg(short, long, default_value = "http://localhost:8080/api/v1")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    List {
        #[arg(long, default_value_t = 0)]
        offset: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Show one product
    Get { id: u64 },
    /// Delete a product
    Delete { id: u64 },
    /// Filter products by title, category or price (`10-20` for a range)
    Filter {
        field: String,
        value: String,
        #[arg(long, default_value_t = 0)]
        offset: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Add a product
    Add(ProductArgs),
    /// Replace a product
    Update {
        id: u64,
        #[command(flatten)]
        product: ProductArgs,
    },
}

#[derive(Args)]
struct ProductArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    price: f64,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    image: String,
}

impl From<ProductArgs> for Product {
    fn from(args: ProductArgs) -> Self {
        Product {
            id: None,
            title: args.title,
            price: args.price,
            description: args.description,
            category: args.category,
            image: args.image,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List { offset, limit } => {
            client
                .get(format!("{}/products/all", base))
                .query(&[("offset", offset), ("limit", limit)])
                .send()
                .await?
        }
        Commands::Get { id } => client.get(format!("{}/products/{}", base, id)).send().await?,
        Commands::Delete { id } => {
            client.delete(format!("{}/products/{}", base, id)).send().await?
        }
        Commands::Filter { field, value, offset, limit } => {
            client
                .get(format!("{}/products/filter", base))
                .query(&[
                    ("field", field),
                    ("value", value),
                    ("offset", offset.to_string()),
                    ("limit", limit.to_string()),
                ])
                .send()
                .await?
        }
        Commands::Add(product) => {
            client
                .post(format!("{}/products/add", base))
                .json(&Product::from(product))
                .send()
                .await?
        }
        Commands::Update { id, product } => {
            client
                .post(format!("{}/products/update/{}", base, id))
                .json(&Product::from(product))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: facade returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
