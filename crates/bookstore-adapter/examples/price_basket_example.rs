/*
[INPUT]:  Running bookstore service on localhost:8080
[OUTPUT]: Catalog listing and a priced basket
[POS]:    Examples - catalog and pricing queries
[UPDATE]: When adding new bookstore endpoints
*/

use bookstore_adapter::*;

/// Example: list the catalog, then price one copy of every book plus an extra
/// copy of the first one.
#[tokio::main]
async fn main() {
    println!("=== Bookstore Pricing Example ===\n");

    let client = match BookstoreClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    let books = match client.list_books().await {
        Ok(books) => books,
        Err(e) => {
            println!("✗ Error listing books: {}", e);
            return;
        }
    };
    for book in &books {
        println!("  #{} {} by {} ({})", book.id, book.title, book.author, book.price);
    }

    let mut basket: Vec<BookId> = books.iter().map(|book| book.id).collect();
    if let Some(first) = basket.first().copied() {
        basket.push(first);
    }

    println!("\nPricing basket {:?}...", basket);
    match client.calculate_price(&basket).await {
        Ok(quote) => println!("✓ Total: {} {}", quote.total_price, quote.currency),
        Err(e) => println!("✗ Error: {}", e),
    }
}
