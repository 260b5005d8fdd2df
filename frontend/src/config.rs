#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000" // backend BIND_ADDRESS default when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // served from the same origin in production
}

pub const BOOKING_URL: &str = "https://cal.com/sam-barksdale/discovery";
