//! Static fixture dataset served when the live source is unavailable.

use crate::orders::{Order, OrderStatus};

/// The four sample orders substituted whenever the live source is empty or
/// fails. Fixtures, not production data.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-2025-001".to_string(),
            booth_number: "A-245".to_string(),
            exhibitor_name: "TechFlow Innovations".to_string(),
            item: "Premium Booth Setup Package".to_string(),
            description: "Complete booth installation with premium furniture, lighting, and tech setup".to_string(),
            color: "White".to_string(),
            quantity: 1,
            status: OrderStatus::OutForDelivery,
            order_date: "June 14, 2025".to_string(),
            comments: "Rush delivery requested".to_string(),
            section: "Section A".to_string(),
        },
        Order {
            id: "ORD-2025-002".to_string(),
            booth_number: "A-245".to_string(),
            exhibitor_name: "TechFlow Innovations".to_string(),
            item: "Interactive Display System".to_string(),
            description: "75\" 4K touchscreen display with interactive software and mounting".to_string(),
            color: "Black".to_string(),
            quantity: 1,
            status: OrderStatus::InRoute,
            order_date: "June 13, 2025".to_string(),
            comments: String::new(),
            section: "Section A".to_string(),
        },
        Order {
            id: "ORD-2025-003".to_string(),
            booth_number: "B-156".to_string(),
            exhibitor_name: "GreenWave Energy".to_string(),
            item: "Marketing Materials Bundle".to_string(),
            description: "Banners, brochures, business cards, and promotional items".to_string(),
            color: "Green".to_string(),
            quantity: 5,
            status: OrderStatus::Delivered,
            order_date: "June 12, 2025".to_string(),
            comments: "Eco-friendly materials requested".to_string(),
            section: "Section B".to_string(),
        },
        Order {
            id: "ORD-2025-004".to_string(),
            booth_number: "C-089".to_string(),
            exhibitor_name: "SmartHealth Corp".to_string(),
            item: "Audio-Visual Equipment".to_string(),
            description: "Professional sound system, microphones, and presentation equipment".to_string(),
            color: "White".to_string(),
            quantity: 1,
            status: OrderStatus::InProcess,
            order_date: "June 14, 2025".to_string(),
            comments: "Medical grade equipment required".to_string(),
            section: "Section C".to_string(),
        },
    ]
}
