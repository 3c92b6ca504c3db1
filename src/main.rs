#[tokio::main]
async fn main() {
    if let Err(e) = barbershop_booking::run().await {
        eprintln!("barbershop-booking failed: {}", e);
        std::process::exit(1);
    }
}
