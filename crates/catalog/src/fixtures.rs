use clearance_core::domain::item::{Category, ClearanceItem, ItemId};

/// Seed entry for the built-in clearance catalog.
struct SeedItem {
    id: &'static str,
    name: &'static str,
    category: Category,
    original_price: f64,
    current_price: f64,
    stock_count: u32,
    days_until_removal: u32,
    urgency_score: f64,
    image_url: &'static str,
    description: &'static str,
}

impl SeedItem {
    fn to_item(&self) -> ClearanceItem {
        ClearanceItem {
            id: ItemId::new(self.id),
            name: self.name.to_string(),
            original_price: self.original_price,
            current_price: self.current_price,
            category: self.category,
            stock_count: self.stock_count,
            days_until_removal: self.days_until_removal,
            urgency_score: self.urgency_score,
            image_url: Some(self.image_url.to_string()),
            description: Some(self.description.to_string()),
        }
    }
}

/// The built-in catalog, fifteen items per category, in display order.
pub fn clearance_items() -> Vec<ClearanceItem> {
    SEED_ITEMS.iter().map(SeedItem::to_item).collect()
}

pub fn seed_item_count() -> usize {
    SEED_ITEMS.len()
}

const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        id: "e1",
        name: "Bluetooth Wireless Headphones",
        category: Category::Electronics,
        original_price: 89.99,
        current_price: 45.99,
        stock_count: 7,
        days_until_removal: 5,
        urgency_score: 0.7,
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
        description: "Premium wireless headphones with noise cancellation",
    },
    SeedItem {
        id: "e2",
        name: "Wireless Phone Charger",
        category: Category::Electronics,
        original_price: 39.99,
        current_price: 19.99,
        stock_count: 4,
        days_until_removal: 4,
        urgency_score: 0.75,
        image_url: "https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=400",
        description: "Fast wireless charging pad for smartphones",
    },
    SeedItem {
        id: "e3",
        name: "Bluetooth Speaker",
        category: Category::Electronics,
        original_price: 59.99,
        current_price: 29.99,
        stock_count: 3,
        days_until_removal: 3,
        urgency_score: 0.8,
        image_url: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400",
        description: "Portable Bluetooth speaker with 12-hour battery",
    },
    SeedItem {
        id: "e4",
        name: "Smartphone Case",
        category: Category::Electronics,
        original_price: 24.99,
        current_price: 9.99,
        stock_count: 12,
        days_until_removal: 8,
        urgency_score: 0.5,
        image_url: "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=400",
        description: "Protective phone case with screen protector",
    },
    SeedItem {
        id: "e5",
        name: "USB-C Hub",
        category: Category::Electronics,
        original_price: 49.99,
        current_price: 24.99,
        stock_count: 6,
        days_until_removal: 4,
        urgency_score: 0.72,
        image_url: "https://images.unsplash.com/photo-1591290619675-2c5b7c7e8c7d?w=400",
        description: "Multi-port USB-C hub with HDMI and ethernet",
    },
    SeedItem {
        id: "e6",
        name: "Wireless Earbuds",
        category: Category::Electronics,
        original_price: 79.99,
        current_price: 39.99,
        stock_count: 5,
        days_until_removal: 3,
        urgency_score: 0.78,
        image_url: "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?w=400",
        description: "True wireless earbuds with charging case",
    },
    SeedItem {
        id: "e7",
        name: "Smart Watch",
        category: Category::Electronics,
        original_price: 199.99,
        current_price: 99.99,
        stock_count: 2,
        days_until_removal: 2,
        urgency_score: 0.9,
        image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400",
        description: "Fitness tracking smartwatch with heart rate monitor",
    },
    SeedItem {
        id: "e8",
        name: "Portable Power Bank",
        category: Category::Electronics,
        original_price: 34.99,
        current_price: 17.99,
        stock_count: 8,
        days_until_removal: 6,
        urgency_score: 0.65,
        image_url: "https://images.unsplash.com/photo-1609592094137-3c3df4e4b451?w=400",
        description: "10000mAh portable power bank with fast charging",
    },
    SeedItem {
        id: "e9",
        name: "Gaming Mouse",
        category: Category::Electronics,
        original_price: 69.99,
        current_price: 34.99,
        stock_count: 4,
        days_until_removal: 3,
        urgency_score: 0.82,
        image_url: "https://images.unsplash.com/photo-1610647752706-3bb12232b3ab?w=400",
        description: "RGB gaming mouse with programmable buttons",
    },
    SeedItem {
        id: "e10",
        name: "Webcam HD",
        category: Category::Electronics,
        original_price: 44.99,
        current_price: 22.99,
        stock_count: 7,
        days_until_removal: 5,
        urgency_score: 0.68,
        image_url: "https://images.unsplash.com/photo-1611532736597-de2d4265fba3?w=400",
        description: "1080p HD webcam with auto-focus",
    },
    SeedItem {
        id: "e11",
        name: "Tablet Stand",
        category: Category::Electronics,
        original_price: 29.99,
        current_price: 14.99,
        stock_count: 10,
        days_until_removal: 7,
        urgency_score: 0.55,
        image_url: "https://images.unsplash.com/photo-1611532736597-de2d4265fba3?w=400",
        description: "Adjustable tablet stand for desk use",
    },
    SeedItem {
        id: "e12",
        name: "Car Phone Mount",
        category: Category::Electronics,
        original_price: 19.99,
        current_price: 9.99,
        stock_count: 15,
        days_until_removal: 9,
        urgency_score: 0.45,
        image_url: "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=400",
        description: "Magnetic car phone mount for dashboard",
    },
    SeedItem {
        id: "e13",
        name: "Wireless Keyboard",
        category: Category::Electronics,
        original_price: 54.99,
        current_price: 27.99,
        stock_count: 6,
        days_until_removal: 4,
        urgency_score: 0.73,
        image_url: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400",
        description: "Compact wireless keyboard with numeric keypad",
    },
    SeedItem {
        id: "e14",
        name: "Phone Ring Holder",
        category: Category::Electronics,
        original_price: 12.99,
        current_price: 5.99,
        stock_count: 20,
        days_until_removal: 10,
        urgency_score: 0.4,
        image_url: "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=400",
        description: "360-degree rotating phone ring holder",
    },
    SeedItem {
        id: "e15",
        name: "LED Strip Lights",
        category: Category::Electronics,
        original_price: 39.99,
        current_price: 19.99,
        stock_count: 9,
        days_until_removal: 6,
        urgency_score: 0.62,
        image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400",
        description: "RGB LED strip lights with remote control",
    },
    SeedItem {
        id: "c1",
        name: "Organic Cotton T-Shirt",
        category: Category::Clothing,
        original_price: 29.99,
        current_price: 19.99,
        stock_count: 3,
        days_until_removal: 2,
        urgency_score: 0.9,
        image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
        description: "Soft organic cotton t-shirt in classic fit",
    },
    SeedItem {
        id: "c2",
        name: "Denim Jacket",
        category: Category::Clothing,
        original_price: 59.99,
        current_price: 29.99,
        stock_count: 6,
        days_until_removal: 6,
        urgency_score: 0.65,
        image_url: "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=400",
        description: "Classic denim jacket with vintage wash",
    },
    SeedItem {
        id: "c3",
        name: "Summer Dress",
        category: Category::Clothing,
        original_price: 49.99,
        current_price: 24.99,
        stock_count: 4,
        days_until_removal: 3,
        urgency_score: 0.8,
        image_url: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400",
        description: "Floral summer dress with adjustable straps",
    },
    SeedItem {
        id: "c4",
        name: "Casual Sneakers",
        category: Category::Clothing,
        original_price: 79.99,
        current_price: 39.99,
        stock_count: 8,
        days_until_removal: 5,
        urgency_score: 0.7,
        image_url: "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400",
        description: "Comfortable casual sneakers for everyday wear",
    },
    SeedItem {
        id: "c5",
        name: "Winter Scarf",
        category: Category::Clothing,
        original_price: 24.99,
        current_price: 12.99,
        stock_count: 12,
        days_until_removal: 8,
        urgency_score: 0.5,
        image_url: "https://images.unsplash.com/photo-1520903920243-00d872a2d1c9?w=400",
        description: "Warm knitted scarf in multiple colors",
    },
    SeedItem {
        id: "c6",
        name: "Baseball Cap",
        category: Category::Clothing,
        original_price: 19.99,
        current_price: 9.99,
        stock_count: 15,
        days_until_removal: 7,
        urgency_score: 0.55,
        image_url: "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?w=400",
        description: "Adjustable baseball cap with embroidered logo",
    },
    SeedItem {
        id: "c7",
        name: "Hoodie Sweatshirt",
        category: Category::Clothing,
        original_price: 44.99,
        current_price: 22.99,
        stock_count: 7,
        days_until_removal: 4,
        urgency_score: 0.75,
        image_url: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400",
        description: "Cozy hoodie sweatshirt with front pocket",
    },
    SeedItem {
        id: "c8",
        name: "Business Shirt",
        category: Category::Clothing,
        original_price: 34.99,
        current_price: 17.99,
        stock_count: 5,
        days_until_removal: 3,
        urgency_score: 0.82,
        image_url: "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=400",
        description: "Professional button-down shirt for work",
    },
    SeedItem {
        id: "c9",
        name: "Yoga Leggings",
        category: Category::Clothing,
        original_price: 39.99,
        current_price: 19.99,
        stock_count: 9,
        days_until_removal: 5,
        urgency_score: 0.68,
        image_url: "https://images.unsplash.com/photo-1506629905877-4d28e2acd4f3?w=400",
        description: "High-waisted yoga leggings with side pockets",
    },
    SeedItem {
        id: "c10",
        name: "Leather Belt",
        category: Category::Clothing,
        original_price: 29.99,
        current_price: 14.99,
        stock_count: 11,
        days_until_removal: 6,
        urgency_score: 0.6,
        image_url: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400",
        description: "Genuine leather belt with metal buckle",
    },
    SeedItem {
        id: "c11",
        name: "Polo Shirt",
        category: Category::Clothing,
        original_price: 32.99,
        current_price: 16.99,
        stock_count: 8,
        days_until_removal: 4,
        urgency_score: 0.72,
        image_url: "https://images.unsplash.com/photo-1586790170083-2f9ceadc732d?w=400",
        description: "Classic polo shirt in multiple colors",
    },
    SeedItem {
        id: "c12",
        name: "Athletic Shorts",
        category: Category::Clothing,
        original_price: 26.99,
        current_price: 13.99,
        stock_count: 10,
        days_until_removal: 7,
        urgency_score: 0.58,
        image_url: "https://images.unsplash.com/photo-1506629905877-4d28e2acd4f3?w=400",
        description: "Moisture-wicking athletic shorts with drawstring",
    },
    SeedItem {
        id: "c13",
        name: "Flannel Shirt",
        category: Category::Clothing,
        original_price: 36.99,
        current_price: 18.99,
        stock_count: 6,
        days_until_removal: 3,
        urgency_score: 0.78,
        image_url: "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=400",
        description: "Comfortable flannel shirt in plaid pattern",
    },
    SeedItem {
        id: "c14",
        name: "Knit Beanie",
        category: Category::Clothing,
        original_price: 16.99,
        current_price: 8.99,
        stock_count: 14,
        days_until_removal: 8,
        urgency_score: 0.52,
        image_url: "https://images.unsplash.com/photo-1520903920243-00d872a2d1c9?w=400",
        description: "Warm knit beanie in solid colors",
    },
    SeedItem {
        id: "c15",
        name: "Cargo Pants",
        category: Category::Clothing,
        original_price: 42.99,
        current_price: 21.99,
        stock_count: 5,
        days_until_removal: 4,
        urgency_score: 0.76,
        image_url: "https://images.unsplash.com/photo-1506629905877-4d28e2acd4f3?w=400",
        description: "Durable cargo pants with multiple pockets",
    },
    SeedItem {
        id: "h1",
        name: "Ceramic Coffee Mug Set",
        category: Category::Home,
        original_price: 24.99,
        current_price: 12.99,
        stock_count: 2,
        days_until_removal: 1,
        urgency_score: 0.95,
        image_url: "https://images.unsplash.com/photo-1514228742587-6b1558fcf93a?w=400",
        description: "Handcrafted ceramic mugs, set of 4",
    },
    SeedItem {
        id: "h2",
        name: "Decorative Plant Pot",
        category: Category::Home,
        original_price: 18.99,
        current_price: 9.99,
        stock_count: 8,
        days_until_removal: 7,
        urgency_score: 0.6,
        image_url: "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=400",
        description: "Ceramic plant pot with drainage holes",
    },
    SeedItem {
        id: "h3",
        name: "Throw Pillow Set",
        category: Category::Home,
        original_price: 34.99,
        current_price: 17.99,
        stock_count: 6,
        days_until_removal: 4,
        urgency_score: 0.75,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
        description: "Decorative throw pillows, set of 2",
    },
    SeedItem {
        id: "h4",
        name: "Picture Frame Set",
        category: Category::Home,
        original_price: 29.99,
        current_price: 14.99,
        stock_count: 10,
        days_until_removal: 6,
        urgency_score: 0.62,
        image_url: "https://images.unsplash.com/photo-1583847268964-b28dc8f51f92?w=400",
        description: "Wooden picture frames, set of 3 different sizes",
    },
    SeedItem {
        id: "h5",
        name: "Candle Set",
        category: Category::Home,
        original_price: 22.99,
        current_price: 11.99,
        stock_count: 12,
        days_until_removal: 8,
        urgency_score: 0.5,
        image_url: "https://images.unsplash.com/photo-1602874801006-36d8ac8bfb2e?w=400",
        description: "Scented candles in glass jars, set of 3",
    },
    SeedItem {
        id: "h6",
        name: "Kitchen Knife Set",
        category: Category::Home,
        original_price: 79.99,
        current_price: 39.99,
        stock_count: 4,
        days_until_removal: 3,
        urgency_score: 0.83,
        image_url: "https://images.unsplash.com/photo-1594736797933-d0408cbf7a6c?w=400",
        description: "Professional kitchen knife set with wooden block",
    },
    SeedItem {
        id: "h7",
        name: "Bathroom Towel Set",
        category: Category::Home,
        original_price: 49.99,
        current_price: 24.99,
        stock_count: 7,
        days_until_removal: 5,
        urgency_score: 0.7,
        image_url: "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?w=400",
        description: "Soft cotton towel set with bath and hand towels",
    },
    SeedItem {
        id: "h8",
        name: "Wall Clock",
        category: Category::Home,
        original_price: 32.99,
        current_price: 16.99,
        stock_count: 9,
        days_until_removal: 6,
        urgency_score: 0.65,
        image_url: "https://images.unsplash.com/photo-1563861826100-9cb868fdbe1c?w=400",
        description: "Modern wall clock with silent movement",
    },
    SeedItem {
        id: "h9",
        name: "Storage Baskets",
        category: Category::Home,
        original_price: 39.99,
        current_price: 19.99,
        stock_count: 5,
        days_until_removal: 4,
        urgency_score: 0.78,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
        description: "Woven storage baskets, set of 2",
    },
    SeedItem {
        id: "h10",
        name: "Table Lamp",
        category: Category::Home,
        original_price: 44.99,
        current_price: 22.99,
        stock_count: 6,
        days_until_removal: 4,
        urgency_score: 0.73,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
        description: "Modern table lamp with fabric shade",
    },
    SeedItem {
        id: "h11",
        name: "Cutting Board Set",
        category: Category::Home,
        original_price: 26.99,
        current_price: 13.99,
        stock_count: 11,
        days_until_removal: 7,
        urgency_score: 0.58,
        image_url: "https://images.unsplash.com/photo-1594736797933-d0408cbf7a6c?w=400",
        description: "Bamboo cutting boards, set of 3 sizes",
    },
    SeedItem {
        id: "h12",
        name: "Shower Curtain",
        category: Category::Home,
        original_price: 19.99,
        current_price: 9.99,
        stock_count: 13,
        days_until_removal: 8,
        urgency_score: 0.55,
        image_url: "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?w=400",
        description: "Waterproof shower curtain with hooks",
    },
    SeedItem {
        id: "h13",
        name: "Bookshelf",
        category: Category::Home,
        original_price: 89.99,
        current_price: 44.99,
        stock_count: 3,
        days_until_removal: 2,
        urgency_score: 0.88,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
        description: "5-tier wooden bookshelf for home office",
    },
    SeedItem {
        id: "h14",
        name: "Area Rug",
        category: Category::Home,
        original_price: 69.99,
        current_price: 34.99,
        stock_count: 4,
        days_until_removal: 3,
        urgency_score: 0.82,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
        description: "Modern geometric area rug for living room",
    },
    SeedItem {
        id: "h15",
        name: "Spice Rack",
        category: Category::Home,
        original_price: 31.99,
        current_price: 15.99,
        stock_count: 8,
        days_until_removal: 5,
        urgency_score: 0.68,
        image_url: "https://images.unsplash.com/photo-1594736797933-d0408cbf7a6c?w=400",
        description: "Rotating spice rack with 16 jars",
    },
    SeedItem {
        id: "f1",
        name: "Yoga Mat Premium",
        category: Category::Fitness,
        original_price: 49.99,
        current_price: 24.99,
        stock_count: 5,
        days_until_removal: 3,
        urgency_score: 0.8,
        image_url: "https://images.unsplash.com/photo-1588286840104-8957b019727f?w=400",
        description: "Non-slip premium yoga mat with carrying strap",
    },
    SeedItem {
        id: "f2",
        name: "Resistance Bands Set",
        category: Category::Fitness,
        original_price: 25.99,
        current_price: 14.99,
        stock_count: 3,
        days_until_removal: 2,
        urgency_score: 0.85,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Complete resistance bands set for home workouts",
    },
    SeedItem {
        id: "f3",
        name: "Dumbbells Set",
        category: Category::Fitness,
        original_price: 79.99,
        current_price: 39.99,
        stock_count: 6,
        days_until_removal: 4,
        urgency_score: 0.75,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Adjustable dumbbells set, 5-25 lbs each",
    },
    SeedItem {
        id: "f4",
        name: "Foam Roller",
        category: Category::Fitness,
        original_price: 34.99,
        current_price: 17.99,
        stock_count: 8,
        days_until_removal: 5,
        urgency_score: 0.7,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "High-density foam roller for muscle recovery",
    },
    SeedItem {
        id: "f5",
        name: "Water Bottle",
        category: Category::Fitness,
        original_price: 19.99,
        current_price: 9.99,
        stock_count: 15,
        days_until_removal: 8,
        urgency_score: 0.5,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Insulated stainless steel water bottle",
    },
    SeedItem {
        id: "f6",
        name: "Jump Rope",
        category: Category::Fitness,
        original_price: 16.99,
        current_price: 8.99,
        stock_count: 12,
        days_until_removal: 7,
        urgency_score: 0.55,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Adjustable jump rope with comfortable handles",
    },
    SeedItem {
        id: "f7",
        name: "Kettlebell",
        category: Category::Fitness,
        original_price: 44.99,
        current_price: 22.99,
        stock_count: 7,
        days_until_removal: 4,
        urgency_score: 0.72,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Cast iron kettlebell, 20 lbs",
    },
    SeedItem {
        id: "f8",
        name: "Exercise Ball",
        category: Category::Fitness,
        original_price: 29.99,
        current_price: 14.99,
        stock_count: 9,
        days_until_removal: 6,
        urgency_score: 0.65,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Anti-burst exercise ball with pump",
    },
    SeedItem {
        id: "f9",
        name: "Fitness Tracker",
        category: Category::Fitness,
        original_price: 89.99,
        current_price: 44.99,
        stock_count: 4,
        days_until_removal: 3,
        urgency_score: 0.83,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Waterproof fitness tracker with heart rate monitor",
    },
    SeedItem {
        id: "f10",
        name: "Yoga Blocks",
        category: Category::Fitness,
        original_price: 22.99,
        current_price: 11.99,
        stock_count: 10,
        days_until_removal: 6,
        urgency_score: 0.6,
        image_url: "https://images.unsplash.com/photo-1588286840104-8957b019727f?w=400",
        description: "High-density foam yoga blocks, set of 2",
    },
    SeedItem {
        id: "f11",
        name: "Gym Bag",
        category: Category::Fitness,
        original_price: 39.99,
        current_price: 19.99,
        stock_count: 11,
        days_until_removal: 7,
        urgency_score: 0.58,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Durable gym bag with multiple compartments",
    },
    SeedItem {
        id: "f12",
        name: "Resistance Loop Bands",
        category: Category::Fitness,
        original_price: 18.99,
        current_price: 9.99,
        stock_count: 13,
        days_until_removal: 8,
        urgency_score: 0.52,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Mini resistance loop bands, set of 5",
    },
    SeedItem {
        id: "f13",
        name: "Workout Gloves",
        category: Category::Fitness,
        original_price: 24.99,
        current_price: 12.99,
        stock_count: 8,
        days_until_removal: 5,
        urgency_score: 0.68,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Padded workout gloves with wrist support",
    },
    SeedItem {
        id: "f14",
        name: "Balance Board",
        category: Category::Fitness,
        original_price: 32.99,
        current_price: 16.99,
        stock_count: 6,
        days_until_removal: 4,
        urgency_score: 0.75,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Wooden balance board for core training",
    },
    SeedItem {
        id: "f15",
        name: "Massage Ball",
        category: Category::Fitness,
        original_price: 14.99,
        current_price: 7.99,
        stock_count: 14,
        days_until_removal: 9,
        urgency_score: 0.48,
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        description: "Textured massage ball for trigger point therapy",
    },
    SeedItem {
        id: "o1",
        name: "LED Desk Lamp",
        category: Category::Office,
        original_price: 34.99,
        current_price: 17.99,
        stock_count: 1,
        days_until_removal: 1,
        urgency_score: 0.98,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
        description: "Adjustable LED desk lamp with USB charging port",
    },
    SeedItem {
        id: "o2",
        name: "Wireless Mouse",
        category: Category::Office,
        original_price: 22.99,
        current_price: 12.99,
        stock_count: 5,
        days_until_removal: 5,
        urgency_score: 0.7,
        image_url: "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400",
        description: "Ergonomic wireless mouse with long battery life",
    },
    SeedItem {
        id: "o3",
        name: "Desk Organizer",
        category: Category::Office,
        original_price: 26.99,
        current_price: 13.99,
        stock_count: 7,
        days_until_removal: 4,
        urgency_score: 0.72,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Bamboo desk organizer with multiple compartments",
    },
    SeedItem {
        id: "o4",
        name: "Office Chair Cushion",
        category: Category::Office,
        original_price: 39.99,
        current_price: 19.99,
        stock_count: 9,
        days_until_removal: 6,
        urgency_score: 0.65,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Memory foam office chair cushion for comfort",
    },
    SeedItem {
        id: "o5",
        name: "Notebook Set",
        category: Category::Office,
        original_price: 18.99,
        current_price: 9.99,
        stock_count: 12,
        days_until_removal: 7,
        urgency_score: 0.58,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Lined notebooks with hardcover, set of 3",
    },
    SeedItem {
        id: "o6",
        name: "Stapler",
        category: Category::Office,
        original_price: 15.99,
        current_price: 7.99,
        stock_count: 15,
        days_until_removal: 8,
        urgency_score: 0.5,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Heavy-duty stapler with staple remover",
    },
    SeedItem {
        id: "o7",
        name: "Monitor Stand",
        category: Category::Office,
        original_price: 49.99,
        current_price: 24.99,
        stock_count: 6,
        days_until_removal: 3,
        urgency_score: 0.78,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Adjustable monitor stand with storage drawer",
    },
    SeedItem {
        id: "o8",
        name: "Pen Set",
        category: Category::Office,
        original_price: 24.99,
        current_price: 12.99,
        stock_count: 10,
        days_until_removal: 6,
        urgency_score: 0.62,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Professional pen set with case",
    },
    SeedItem {
        id: "o9",
        name: "File Folders",
        category: Category::Office,
        original_price: 12.99,
        current_price: 6.99,
        stock_count: 18,
        days_until_removal: 9,
        urgency_score: 0.45,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Manila file folders, pack of 25",
    },
    SeedItem {
        id: "o10",
        name: "Desk Calendar",
        category: Category::Office,
        original_price: 19.99,
        current_price: 9.99,
        stock_count: 11,
        days_until_removal: 7,
        urgency_score: 0.55,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "2024 desk calendar with monthly pages",
    },
    SeedItem {
        id: "o11",
        name: "Paper Shredder",
        category: Category::Office,
        original_price: 79.99,
        current_price: 39.99,
        stock_count: 4,
        days_until_removal: 3,
        urgency_score: 0.83,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Cross-cut paper shredder for home office",
    },
    SeedItem {
        id: "o12",
        name: "Whiteboard",
        category: Category::Office,
        original_price: 32.99,
        current_price: 16.99,
        stock_count: 8,
        days_until_removal: 5,
        urgency_score: 0.68,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Magnetic whiteboard with markers and eraser",
    },
    SeedItem {
        id: "o13",
        name: "Desk Pad",
        category: Category::Office,
        original_price: 22.99,
        current_price: 11.99,
        stock_count: 13,
        days_until_removal: 8,
        urgency_score: 0.52,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Large desk pad with non-slip base",
    },
    SeedItem {
        id: "o14",
        name: "Label Maker",
        category: Category::Office,
        original_price: 44.99,
        current_price: 22.99,
        stock_count: 5,
        days_until_removal: 4,
        urgency_score: 0.76,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Portable label maker with various tape colors",
    },
    SeedItem {
        id: "o15",
        name: "Bookends",
        category: Category::Office,
        original_price: 16.99,
        current_price: 8.99,
        stock_count: 14,
        days_until_removal: 8,
        urgency_score: 0.48,
        image_url: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=400",
        description: "Metal bookends with non-slip base, set of 2",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use clearance_core::domain::item::{Category, ItemId};
    use clearance_core::engine::filter::is_true_clearance;
    use clearance_core::engine::urgency::UrgencySource;

    use super::{clearance_items, seed_item_count};

    #[test]
    fn seed_covers_every_category_evenly() {
        let items = clearance_items();
        assert_eq!(items.len(), 75);
        assert_eq!(seed_item_count(), 75);

        let mut per_category: HashMap<Category, usize> = HashMap::new();
        for item in &items {
            *per_category.entry(item.category).or_default() += 1;
        }
        for category in Category::ALL {
            assert_eq!(per_category.get(&category), Some(&15), "category {category}");
        }
    }

    #[test]
    fn seed_ids_are_unique_and_items_valid() {
        let items = clearance_items();
        let ids: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
        assert_eq!(ids.len(), items.len());

        for item in &items {
            assert!(item.validate().is_ok(), "item {} should be valid", item.id);
        }
    }

    #[test]
    fn desk_lamp_is_the_scarcest_office_item() {
        let items = clearance_items();
        let lamp = items.iter().find(|item| item.id.as_str() == "o1").expect("o1 is seeded");

        assert_eq!(lamp.name, "LED Desk Lamp");
        assert_eq!(lamp.stock_count, 1);
        assert_eq!(lamp.days_until_removal, 1);
        assert!(is_true_clearance(lamp, UrgencySource::Derived));
    }
}
