use shared::domain::{ChefRecord, PricingOption, Review};

fn pricing(kind: &str, price: &str, note: &str) -> PricingOption {
    PricingOption {
        kind: kind.to_string(),
        price: price.to_string(),
        note: note.to_string(),
    }
}

fn review(reviewer: &str, stars: &str, text: &str) -> Review {
    Review {
        reviewer: reviewer.to_string(),
        stars: stars.to_string(),
        text: text.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn menu(dinner: &[&str], events: &[&str]) -> std::collections::BTreeMap<String, Vec<String>> {
    [
        ("Dinner".to_string(), strings(dinner)),
        ("Events".to_string(), strings(events)),
    ]
    .into_iter()
    .collect()
}

/// Chefs every fresh store starts with, ids "1" to "3".
pub fn seed_chefs() -> Vec<ChefRecord> {
    vec![
        ChefRecord {
            location: "California".into(),
            cuisine: "Indian".into(),
            image_url: Some("images/chef1.jpg".into()),
            description: "Master of Indian cuisine with 15 years of experience".into(),
            specialties: strings(&["Curry", "Tandoori", "Biryani"]),
            dietary_tags: strings(&["Vegetarian", "Vegan", "Gluten-Free"]),
            rating: Some(4.8),
            review_count: Some(45),
            pricing: vec![
                pricing("Dinner Service", "$85/hour", "Minimum 2 hours"),
                pricing("Event Catering", "$190/hour", "For parties and gatherings"),
            ],
            menu_options: menu(
                &["Butter Chicken with Naan", "Lamb Rogan Josh", "Vegetable Biryani"],
                &["Wedding Reception Package", "Birthday Party Buffet"],
            ),
            reviews: vec![
                review("Sarah M.", "★★★★★", "Amazing chef!"),
                review("Mike R.", "★★★★★", "Perfect for our dinner party"),
            ],
            ..ChefRecord::named("Rajesh Kumar").with_id("1")
        },
        ChefRecord {
            location: "California".into(),
            cuisine: "Mexican".into(),
            image_url: Some("images/chef2.jpg".into()),
            description: "Authentic Mexican cuisine specialist".into(),
            specialties: strings(&["Tacos", "Enchiladas", "Guacamole"]),
            dietary_tags: strings(&["Vegetarian", "Gluten-Free"]),
            rating: Some(4.7),
            review_count: Some(38),
            pricing: vec![
                pricing("Dinner Service", "$75/hour", "Minimum 2 hours"),
                pricing("Taco Bar Setup", "$250", "For 10+ people"),
            ],
            menu_options: menu(
                &["Chicken Tacos", "Beef Enchiladas", "Vegetarian Fajitas"],
                &["Mexican Fiesta Package", "Taco Tuesday Special"],
            ),
            reviews: vec![
                review("Anna S.", "★★★★☆", "Innovative and delicious!"),
                review(
                    "John D.",
                    "★★★★★",
                    "Best Mexican food Ive had outside Mexico",
                ),
            ],
            ..ChefRecord::named("Maria Rodriguez").with_id("2")
        },
        ChefRecord {
            location: "California".into(),
            cuisine: "Asian".into(),
            image_url: Some("images/chef3.jpg".into()),
            description: "Fusion Asian cuisine expert".into(),
            specialties: strings(&["Sushi", "Stir Fry", "Dim Sum"]),
            dietary_tags: strings(&["Vegetarian", "Vegan", "Keto"]),
            rating: Some(4.6),
            review_count: Some(27),
            pricing: vec![
                pricing("Dinner Service", "$90/hour", "Minimum 2 hours"),
                pricing("Sushi Party", "$300", "For 8+ people"),
            ],
            menu_options: menu(
                &["Teriyaki Chicken", "Vegetable Stir Fry", "Miso Soup"],
                &["Sushi Rolling Workshop", "Asian Fusion Buffet"],
            ),
            reviews: vec![
                review("Lisa K.", "★★★★★", "The sushi was incredible!"),
                review("Mark T.", "★★★★☆", "Great presentation and taste"),
            ],
            ..ChefRecord::named("James Chen").with_id("3")
        },
    ]
}
