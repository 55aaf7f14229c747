//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shared::models::{DietFilter, PaymentMethod, UserRole};

/// DineDash - order food and book tables from the terminal
#[derive(Parser, Debug)]
#[command(name = "dinedash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL
    #[arg(long, global = true, env = "DINEDASH_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Directory for local storage and logs
    #[arg(long, global = true, env = "DINEDASH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),

    /// Create a customer or restaurant account
    Signup(SignupArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Browse restaurants
    Restaurants(BrowseArgs),

    /// Show a restaurant and its menu
    Restaurant {
        restaurant_id: String,
        #[arg(long, value_enum)]
        diet: Option<DietArg>,
    },

    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// Check free seats for a slot
    Availability(SlotArgs),

    /// Book a table (checks availability first)
    Reserve {
        #[command(flatten)]
        slot: SlotArgs,
        #[arg(long, default_value_t = 2)]
        party_size: u32,
    },

    /// Verify a payment after returning from checkout
    PaymentStatus { session_id: Option<String> },

    /// Track an order
    Order {
        order_id: String,
        /// Keep refreshing until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// Show a reservation
    Reservation { reservation_id: String },

    /// Own orders and reservations
    Profile {
        #[arg(long)]
        watch: bool,
    },

    /// Favorite restaurants
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Restaurant owner dashboard
    Dashboard {
        #[command(subcommand)]
        action: DashboardAction,
    },

    /// Platform administration
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Resolve an app path such as `/orders/{id}` or `/admin`
    Open { path: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    Customer,
    Restaurant,
    Admin,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Customer => UserRole::Customer,
            RoleArg::Restaurant => UserRole::Restaurant,
            RoleArg::Admin => UserRole::Admin,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietArg {
    Veg,
    #[value(name = "non_veg", alias = "non-veg")]
    NonVeg,
}

impl From<DietArg> for DietFilter {
    fn from(diet: DietArg) -> Self {
        match diet {
            DietArg::Veg => DietFilter::Veg,
            DietArg::NonVeg => DietFilter::NonVeg,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayArg {
    /// Cash on delivery
    Cod,
    /// Card via hosted checkout
    Stripe,
}

impl From<PayArg> for PaymentMethod {
    fn from(pay: PayArg) -> Self {
        match pay {
            PayArg::Cod => PaymentMethod::Cod,
            PayArg::Stripe => PaymentMethod::Stripe,
        }
    }
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, value_enum, default_value = "customer")]
    pub role: RoleArg,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "DINEDASH_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long, value_enum, default_value = "customer")]
    pub role: RoleArg,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "DINEDASH_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: Option<String>,

    #[command(flatten)]
    pub restaurant: RestaurantProfileArgs,
}

/// Restaurant details, used with `--role restaurant`
#[derive(Args, Debug, Default)]
pub struct RestaurantProfileArgs {
    #[arg(long)]
    pub restaurant_name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub cuisine: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub restaurant_phone: Option<String>,
    #[arg(long)]
    pub hours: Option<String>,
    /// delivery, reservations or both
    #[arg(long)]
    pub service_type: Option<String>,
    #[arg(long)]
    pub veg: bool,
    #[arg(long)]
    pub non_veg: bool,
    #[arg(long)]
    pub seats: Option<i32>,
    #[arg(long)]
    pub slot_minutes: Option<i32>,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub diet: Option<DietArg>,
    #[arg(long)]
    pub service_type: Option<String>,
    #[arg(long)]
    pub cuisine: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CartAction {
    Show,
    /// Add one unit of a menu item
    Add {
        restaurant_id: String,
        item_id: String,
    },
    /// Set a line's quantity, 0 removes it
    Set {
        item_id: String,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    Remove { item_id: String },
    Clear,
}

#[derive(Args, Debug)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, value_enum, default_value = "cod")]
    pub pay: PayArg,
}

#[derive(Args, Debug)]
pub struct SlotArgs {
    pub restaurant_id: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// HH:MM
    #[arg(long)]
    pub time: String,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    List,
    Add { restaurant_id: String },
    Remove { restaurant_id: String },
}

#[derive(Subcommand, Debug)]
pub enum DashboardAction {
    Orders,
    Reservations,
    OrderStatus { order_id: String, status: String },
    ReservationStatus { reservation_id: String, status: String },
    AddCategory {
        name: String,
        #[arg(long, default_value_t = 0)]
        display_order: i32,
    },
    AddItem {
        category_id: String,
        name: String,
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        non_veg: bool,
        #[arg(long)]
        unavailable: bool,
    },
    /// Restaurant home stats
    Summary,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, default_value = "")]
    pub search: String,
    /// Wire status value, or `all`
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Platform stats and recent activity
    Stats,
    Restaurants(FilterArgs),
    Orders(FilterArgs),
    Reservations(FilterArgs),
    Users(FilterArgs),
    RestaurantStatus { restaurant_id: String, status: String },
    DeleteRestaurant { restaurant_id: String },
    OrderStatus { order_id: String, status: String },
    ReservationStatus { reservation_id: String, status: String },
    UserStatus { user_id: String, status: String },
    DeleteUser { user_id: String },
}
