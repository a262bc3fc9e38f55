use std::collections::BTreeMap;

use shared::domain::{ChefRecord, PricingOption, Review};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn pricing(options: &[(&str, &str, &str)]) -> Vec<PricingOption> {
    options
        .iter()
        .map(|(kind, price, note)| PricingOption {
            kind: kind.to_string(),
            price: price.to_string(),
            note: note.to_string(),
        })
        .collect()
}

fn reviews(entries: &[(&str, &str, &str)]) -> Vec<Review> {
    entries
        .iter()
        .map(|(reviewer, stars, text)| Review {
            reviewer: reviewer.to_string(),
            stars: stars.to_string(),
            text: text.to_string(),
        })
        .collect()
}

fn menu(dinner: &[&str], events: &[&str]) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        ("Dinner".to_string(), strings(dinner)),
        ("Events".to_string(), strings(events)),
    ])
}

/// Chef profiles shipped with the site. They are listed first whether or not
/// any chef endpoint is reachable.
pub fn static_chefs() -> Vec<ChefRecord> {
    vec![
        ChefRecord {
            location: "San Jose, California".into(),
            cuisine: "Indian".into(),
            image_url: Some("images/chef1.jpg".into()),
            profile_url: Some("chef-profile-rajesh.html".into()),
            description: "With over 12 years of experience in professional kitchens, Rajesh brings \
                authentic Indian flavors to your home. He specializes in traditional and fusion \
                Indian cuisine, ensuring every dish is prepared with the freshest ingredients and \
                authentic spices."
                .into(),
            specialties: strings(&[
                "Traditional Indian Cuisine",
                "Fusion Indian-American",
                "Vegetarian and Vegan Indian",
                "Regional Indian specialties",
            ]),
            dietary_tags: strings(&["Vegetarian", "Vegan", "Gluten-Free", "Dairy-Free"]),
            rating: Some(4.8),
            review_count: Some(127),
            pricing: pricing(&[
                ("Dinner Service", "$75/hour", "Minimum 2 hours"),
                ("Event Catering", "$150/hour", "For parties and gatherings"),
                ("Weekly Meal Prep", "$50/hour", "Plus ingredient costs"),
            ]),
            menu_options: menu(
                &[
                    "Butter Chicken with Naan",
                    "Lamb Rogan Josh",
                    "Paneer Tikka Masala",
                    "Biryani Feast",
                ],
                &[
                    "Wedding Reception Package",
                    "Birthday Party Buffet",
                    "Holiday Dinner Special",
                    "Corporate Lunch",
                ],
            ),
            reviews: reviews(&[
                (
                    "Sarah M.",
                    "★★★★★",
                    "Rajesh made our Diwali dinner unforgettable! The flavors were authentic and \
                     the presentation was beautiful.",
                ),
                (
                    "Mike R.",
                    "★★★★★",
                    "Amazing chef! The butter chicken was the best Ive ever had. Will definitely \
                     book again.",
                ),
                (
                    "Jennifer L.",
                    "★★★★☆",
                    "Great service and delicious food. The spices were perfectly balanced for our \
                     taste.",
                ),
            ]),
            ..ChefRecord::named("Rajesh Kumar").with_id("static-rajesh")
        },
        ChefRecord {
            location: "Los Angeles, California".into(),
            cuisine: "Italian".into(),
            image_url: Some("images/chef2.jpg".into()),
            profile_url: Some("chef-profile-maria.html".into()),
            description: "Maria brings 15 years of culinary expertise from top restaurants in \
                California and Italy. Her passion for fresh, seasonal ingredients and traditional \
                cooking techniques creates unforgettable Mediterranean and Italian dining \
                experiences."
                .into(),
            specialties: strings(&[
                "Authentic Italian Cuisine",
                "Mediterranean Fusion",
                "California Coastal Cuisine",
                "Wood-fired specialties",
            ]),
            dietary_tags: strings(&["Gluten-Free", "Keto", "Dairy-Free", "Low-Carb"]),
            rating: Some(4.9),
            review_count: Some(89),
            pricing: pricing(&[
                ("Dinner Service", "$85/hour", "Minimum 2 hours"),
                ("Event Catering", "$175/hour", "For parties and gatherings"),
                ("Weekly Meal Prep", "$60/hour", "Plus ingredient costs"),
            ]),
            menu_options: menu(
                &[
                    "Osso Buco alla Milanese",
                    "Grilled Branzino with Herbs",
                    "Homemade Pasta Carbonara",
                    "Lamb Tagine",
                ],
                &[
                    "Italian Wedding Feast",
                    "Mediterranean Buffet",
                    "Holiday Antipasto Spread",
                    "Corporate Italian Lunch",
                ],
            ),
            reviews: reviews(&[
                (
                    "David K.",
                    "★★★★★",
                    "Marias Italian cooking is absolutely authentic! Felt like I was back in \
                     Tuscany. Incredible flavors!",
                ),
                (
                    "Lisa P.",
                    "★★★★★",
                    "Perfect for our anniversary dinner. The presentation was beautiful and every \
                     bite was delicious.",
                ),
                (
                    "Robert M.",
                    "★★★★☆",
                    "Outstanding chef! The pasta was made fresh and the seafood was perfectly \
                     cooked.",
                ),
            ]),
            ..ChefRecord::named("Maria Rodriguez").with_id("static-maria")
        },
        ChefRecord {
            location: "San Francisco, California".into(),
            cuisine: "Asian".into(),
            image_url: Some("images/chef3.jpg".into()),
            profile_url: Some("chef-profile-james.html".into()),
            description: "James brings 10 years of experience from Michelin-starred restaurants \
                in San Francisco and Tokyo. His innovative approach to Asian fusion cuisine \
                combines traditional techniques with modern presentation, creating visually \
                stunning and delicious dishes."
                .into(),
            specialties: strings(&[
                "Japanese Cuisine",
                "Asian Fusion",
                "Sushi Mastery",
                "Wok Cooking",
            ]),
            dietary_tags: strings(&["Vegetarian", "Vegan", "Gluten-Free", "Keto"]),
            rating: Some(4.7),
            review_count: Some(67),
            pricing: pricing(&[
                ("Dinner Service", "$90/hour", "Minimum 2 hours"),
                ("Event Catering", "$180/hour", "For parties and gatherings"),
                (
                    "Sushi Party",
                    "$250",
                    "For 8+ people, includes sushi rolling demonstration",
                ),
            ]),
            menu_options: menu(
                &[
                    "Miso-Glazed Black Cod",
                    "Thai Green Curry",
                    "Szechuan Beef",
                    "Vegetable Tempura",
                ],
                &[
                    "Sushi & Sashimi Platter",
                    "Asian Fusion Buffet",
                    "Dim Sum Banquet",
                    "Ramen Bar",
                ],
            ),
            reviews: reviews(&[
                (
                    "Emily T.",
                    "★★★★★",
                    "The sushi was incredible! James not only prepared amazing food but also \
                     taught us how to make our own rolls.",
                ),
                (
                    "Michael S.",
                    "★★★★★",
                    "Best Asian food Ive had outside of Japan. The presentation was like a work \
                     of art.",
                ),
                (
                    "Sophia L.",
                    "★★★★☆",
                    "Delicious and creative dishes. The green curry was perfectly balanced.",
                ),
            ]),
            ..ChefRecord::named("James Chen").with_id("static-james")
        },
    ]
}
