//! Terminal rendering of page data

use shared::models::{
    AdminOrder, AdminReservation, AdminRestaurant, AdminUser, DashboardStats, MenuSection, Order,
    Reservation, Restaurant,
};
use shared::money::format_amount;

use crate::core::status;
use crate::pages::checkout::CartSummary;
use crate::pages::home::{diet_badges, service_badge};
use crate::pages::restaurant_dashboard::HomeSummary;
use crate::pages::tracking::{OrderView, ReservationView};

pub fn restaurants(list: &[Restaurant]) {
    if list.is_empty() {
        println!("No restaurants found");
        return;
    }
    for r in list {
        let diet = diet_badges(r).join(" ");
        println!(
            "{}  {:<28} {:<13} {:<14} {}",
            r.restaurant_id,
            r.name,
            service_badge(&r.service_type),
            r.cuisine,
            diet
        );
    }
}

pub fn restaurant(r: &Restaurant) {
    println!("{}  [{}]", r.name, service_badge(&r.service_type));
    if !r.cuisine.is_empty() {
        println!("  {}", r.cuisine);
    }
    if !r.description.is_empty() {
        println!("  {}", r.description);
    }
    if !r.address.is_empty() {
        println!("  {}", r.address);
    }
    if !r.hours.is_empty() {
        println!("  Hours: {}", r.hours);
    }
}

/// Menu with the quantity already in the cart next to each item
pub fn menu(sections: &[MenuSection], in_cart: impl Fn(&str) -> u32) {
    if sections.is_empty() {
        println!("No menu items yet");
        return;
    }
    for section in sections {
        println!("\n{}", section.category.name);
        for item in &section.items {
            let marker = if item.is_veg { "VEG" } else { "NON-VEG" };
            let qty = in_cart(&item.item_id);
            let badge = if qty > 0 { format!("  (×{} in cart)", qty) } else { String::new() };
            let availability = if item.is_available { "" } else { "  [unavailable]" };
            println!(
                "  {}  {:<28} {:>10}  {}{}{}",
                item.item_id,
                item.name,
                format_amount(item.price),
                marker,
                availability,
                badge
            );
        }
    }
}

pub fn cart(summary: &CartSummary) {
    println!(
        "Cart from {}",
        summary.restaurant_name.as_deref().unwrap_or(&summary.restaurant_id)
    );
    for line in &summary.items {
        println!(
            "  {}  {:<28} {:>3} × {:>10} = {:>10}",
            line.item.item_id,
            line.item.name,
            line.quantity,
            format_amount(line.item.price),
            format_amount(line.line_total())
        );
    }
    println!("  Subtotal      {:>12}", format_amount(summary.subtotal));
    println!("  Delivery fee  {:>12}", format_amount(summary.delivery_fee));
    println!("  Total         {:>12}", format_amount(summary.grand_total));
}

pub fn order_view(view: &OrderView) {
    let order = &view.order;
    println!(
        "Order {}  {}  [{}]",
        order.order_id,
        view.status_label,
        view.tone.name()
    );
    for step in &view.timeline {
        let mark = if step.active { "●" } else { "○" };
        match order.reached_at(&step.status) {
            Some(at) => println!("  {} {:<18} {}", mark, step.label, at),
            None => println!("  {} {}", mark, step.label),
        }
    }
    if let Some(eta) = &view.delivery_estimate {
        println!("  Estimated delivery: {}", eta);
    }
    for item in &order.items {
        println!("  {:>3} × {:<28} {:>10}", item.quantity, item.name, format_amount(item.price));
    }
    println!("  Total: {}", format_amount(order.total_amount));
}

pub fn reservation_view(view: &ReservationView) {
    let r = &view.reservation;
    println!(
        "Reservation {}  {}  [{}]",
        r.reservation_id,
        view.status_label,
        view.tone.name()
    );
    println!("  {} at {}, party of {}", r.date, r.time, r.party_size);
    println!(
        "  Amount: {}  payment {} [{}]",
        format_amount(r.amount),
        r.payment_status,
        view.payment_tone.name()
    );
}

pub fn orders(list: &[Order]) {
    if list.is_empty() {
        println!("No orders yet");
        return;
    }
    for o in list {
        println!(
            "{}  {:<18} {:>3} items  {:>10}  {}",
            o.order_id,
            status::order_status_label(&o.status),
            o.item_count(),
            format_amount(o.total_amount),
            o.created_at.as_deref().unwrap_or("")
        );
    }
}

pub fn reservations(list: &[Reservation]) {
    if list.is_empty() {
        println!("No reservations yet");
        return;
    }
    for r in list {
        println!(
            "{}  {:<16} {} {}  party {:>2}  {:>10}",
            r.reservation_id,
            status::reservation_status_label(&r.status),
            r.date,
            r.time,
            r.party_size,
            format_amount(r.amount)
        );
    }
}

pub fn home_summary(s: &HomeSummary) {
    println!("{}", s.restaurant.name);
    println!("  Total orders     {}", s.total_orders);
    println!("  Pending orders   {}", s.pending_orders);
    println!("  Revenue          {}", format_amount(s.revenue));
    println!("  Menu items       {}", s.menu_items);
}

pub fn stats(stats: &DashboardStats) {
    println!("Users          {}", stats.total_users);
    println!("Restaurants    {}", stats.total_restaurants);
    println!(
        "Orders         {} ({} pending, {} this week)",
        stats.total_orders, stats.pending_orders, stats.recent_orders
    );
    println!(
        "Reservations   {} ({} pending, {} this week)",
        stats.total_reservations, stats.pending_reservations, stats.recent_reservations
    );
    println!(
        "Revenue        {} (orders {}, reservations {})",
        format_amount(stats.total_revenue),
        format_amount(stats.order_revenue),
        format_amount(stats.reservation_revenue)
    );
}

pub fn admin_restaurants(rows: &[&AdminRestaurant]) {
    if rows.is_empty() {
        println!("No restaurants found");
        return;
    }
    for row in rows {
        let r = &row.restaurant;
        println!(
            "{}  {:<28} {:<10} owner {:<24} {:>4} orders  {:>10}",
            r.restaurant_id,
            r.name,
            r.status,
            row.owner.as_ref().map(|o| o.email.as_str()).unwrap_or("-"),
            row.order_count,
            format_amount(row.revenue)
        );
    }
}

pub fn admin_orders(rows: &[&AdminOrder]) {
    if rows.is_empty() {
        println!("No orders found");
        return;
    }
    for row in rows {
        let o = &row.order;
        println!(
            "{}  {:<24} {:<18} {:>10}  {}",
            o.order_id,
            row.restaurant_label().unwrap_or("-"),
            o.status.as_str().replace('_', " "),
            format_amount(o.total_amount),
            o.payment_status
        );
    }
}

pub fn admin_reservations(rows: &[&AdminReservation]) {
    if rows.is_empty() {
        println!("No reservations found");
        return;
    }
    for row in rows {
        let r = &row.reservation;
        println!(
            "{}  {:<24} {:<16} {} {}  party {:>2}",
            r.reservation_id,
            row.restaurant_label().unwrap_or("-"),
            status::reservation_status_label(&r.status),
            r.date,
            r.time,
            r.party_size
        );
    }
}

pub fn admin_users(rows: &[&AdminUser]) {
    if rows.is_empty() {
        println!("No users found");
        return;
    }
    for row in rows {
        let u = &row.user;
        println!(
            "{}  {:<20} {:<28} {:<10} {:<9} {:>3} orders {:>3} reservations",
            u.user_id, u.name, u.email, u.role, u.status, row.order_count, row.reservation_count
        );
    }
}
