//! Startup data: the records and configuration every fresh session begins
//! with. A page reload rebuilds the dashboard from these, there is no
//! persistence layer.

use crate::config::branch::Branch;
use crate::config::catalog::{
    Catalog, ClientAccount, CompanyProfile, Courier, PaymentMethod, Product, Zone,
};
use crate::config::shift::Shift;
use crate::domain::client::ClientRecord;
use crate::domain::logistics::Shipment;
use crate::domain::order::Order;
use crate::domain::pricing::PricingEntry;
use crate::domain::record::RecordId;
use crate::domain::staff::StaffTask;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

pub fn orders() -> Vec<Order> {
    vec![
        Order::new(
            RecordId::new("ORD", 1),
            "F-A123",
            "Oficina Central",
            date(2023, 10, 26),
            date(2023, 10, 30),
            "Entregado",
            "Matutino",
            "Centro",
            "Juan Pérez",
            "Ramo de 24 Rosas Rojas",
        ),
        Order::new(
            RecordId::new("ORD", 2),
            "F-B456",
            "Tech Solutions",
            date(2023, 10, 27),
            date(2023, 11, 5),
            "Preparación",
            "Vespertino",
            "Norte",
            "Ana Gómez",
            "Arreglo de Girasoles",
        ),
        Order::new(
            RecordId::new("ORD", 3),
            "F-C789",
            "Clean Co.",
            date(2023, 10, 28),
            date(2023, 11, 2),
            "En Espera",
            "Matutino",
            "Sur",
            "Carlos Sánchez",
            "Orquídea Phalaenopsis",
        ),
        Order::new(
            RecordId::new("ORD", 4),
            "F-D012",
            "Diseño Interior Mx",
            date(2023, 10, 29),
            date(2023, 11, 10),
            "Cancelado",
            "Nocturno",
            "Centro",
            "Juan Pérez",
            "Ramo de 24 Rosas Rojas",
        ),
        Order::new(
            RecordId::new("ORD", 5),
            "F-E345",
            "Café del Esquina",
            date(2023, 11, 1),
            date(2023, 11, 3),
            "En Tránsito",
            "Matutino",
            "Norte",
            "Ana Gómez",
            "Arreglo de Girasoles",
        ),
        Order::new(
            RecordId::new("ORD", 6),
            "F-F678",
            "Librería El Saber",
            date(2023, 11, 2),
            date(2023, 11, 4),
            "Regresado",
            "Vespertino",
            "Sur",
            "Carlos Sánchez",
            "Orquídea Phalaenopsis",
        ),
    ]
}

pub fn pricing() -> Vec<PricingEntry> {
    vec![
        PricingEntry::new(
            RecordId::new("PRC", 1),
            "Venta mayoreo",
            "Entregado",
            date(2023, 11, 5),
            "Tech Distributors",
            "PayPal",
            1200.0,
            50.0,
            800.0,
            "Laptop Stand",
            "LS-001",
        ),
        PricingEntry::new(
            RecordId::new("PRC", 2),
            "Venta menudeo",
            "En Espera",
            date(2023, 11, 12),
            "Innovate Corp",
            "Stripe",
            150.0,
            20.0,
            90.0,
            "Mousepad",
            "MP-005",
        ),
        PricingEntry::new(
            RecordId::new("PRC", 3),
            "Factura a crédito",
            "Cancelado",
            date(2023, 10, 20),
            "Office Supplies Inc.",
            "Depósito",
            5000.0,
            150.0,
            3500.0,
            "Silla Ergonómica",
            "SE-002",
        ),
    ]
}

pub fn clients() -> Vec<ClientRecord> {
    vec![
        ClientRecord::new(
            RecordId::new("CLI", 1),
            "F-CL-01",
            "Entregado",
            date(2023, 12, 1),
            "Global Imports",
            "contact@globalimports.com",
            "555-0101",
            "Almacén Central",
            "555-0102",
        ),
        ClientRecord::new(
            RecordId::new("CLI", 2),
            "F-CL-02",
            "Cancelado",
            date(2023, 11, 15),
            "Creative Minds",
            "hello@creativeminds.dev",
            "555-0201",
            "Oficina de Proyectos",
            "555-0202",
        ),
        ClientRecord::new(
            RecordId::new("CLI", 3),
            "F-CL-03",
            "En Espera",
            date(2024, 1, 10),
            "Futura Tech",
            "info@futuratech.io",
            "555-0301",
            "Gerencia",
            "555-0302",
        ),
    ]
}

pub fn shipments() -> Vec<Shipment> {
    vec![
        Shipment::new(
            RecordId::new("LOG", 1),
            "F-L-01",
            "En Tránsito",
            date(2023, 12, 10),
            "Global Imports",
            "Juan Pérez",
            "México",
            "Jalisco",
            "Guadalajara",
            "44100",
            "Centro",
            "Av. Juárez 123",
            "Edificio de cristal, puerta negra",
        ),
        Shipment::new(
            RecordId::new("LOG", 2),
            "F-L-02",
            "Entregado",
            date(2023, 11, 25),
            "Creative Minds",
            "Ana Gómez",
            "México",
            "Nuevo León",
            "Monterrey",
            "64000",
            "Del Valle",
            "Calzada del Valle 456",
            "Frente al parque",
        ),
        Shipment::new(
            RecordId::new("LOG", 3),
            "F-L-03",
            "En Espera",
            date(2023, 12, 20),
            "Futura Tech",
            "Carlos Sánchez",
            "México",
            "CDMX",
            "Ciudad de México",
            "06000",
            "Roma Norte",
            "Orizaba 789",
            "Portón de madera",
        ),
    ]
}

pub fn staff_tasks() -> Vec<StaffTask> {
    vec![
        StaffTask::new(
            RecordId::new("PER", 1),
            "FP-001",
            "En Tránsito",
            date(2023, 12, 15),
            "Global Imports",
            "Para el mejor equipo, con aprecio.",
            "Entregar en recepción.",
        ),
        StaffTask::new(
            RecordId::new("PER", 2),
            "FP-002",
            "Preparación",
            date(2023, 12, 22),
            "Creative Minds",
            "Felices fiestas y próspero año nuevo.",
            "Confirmar diseño antes de imprimir.",
        ),
        StaffTask::new(
            RecordId::new("PER", 3),
            "FP-003",
            "En Espera",
            date(2024, 1, 5),
            "Futura Tech",
            "Gracias por su preferencia.",
            "Cliente solicitará muestra física.",
        ),
    ]
}

pub fn shifts() -> Vec<Shift> {
    vec![
        Shift::new("T-01", "Matutino", "06:00 a 15:00"),
        Shift::new("T-02", "Vespertino", "15:00 a 20:00"),
        Shift::new("T-03", "Nocturno", "20:00 a 02:00"),
    ]
}

pub fn branches() -> Vec<Branch> {
    vec![
        Branch::new(
            "SUC-01",
            "Centro",
            "55-1234-5678",
            "México",
            "CDMX",
            "Cuauhtémoc",
            "Centro Histórico",
            "Madero 10, Piso 2",
            "https://goo.gl/maps/example1",
        ),
        Branch::new(
            "SUC-02",
            "Norte",
            "55-2345-6789",
            "México",
            "CDMX",
            "Gustavo A. Madero",
            "Lindavista",
            "Av. Politécnico 20",
            "https://goo.gl/maps/example2",
        ),
        Branch::new(
            "SUC-03",
            "Sur",
            "55-3456-7890",
            "México",
            "CDMX",
            "Coyoacán",
            "Del Carmen",
            "Allende 30",
            "https://goo.gl/maps/example3",
        ),
    ]
}

pub fn catalog() -> Catalog {
    let payment_methods = vec![
        PaymentMethod {
            id: 1,
            name: "Stripe".to_string(),
        },
        PaymentMethod {
            id: 2,
            name: "Paypal".to_string(),
        },
        PaymentMethod {
            id: 3,
            name: "Depósito".to_string(),
        },
    ];

    let couriers = vec![
        Courier {
            id: "REP-001".to_string(),
            code: "R-01".to_string(),
            name: "Juan Pérez".to_string(),
            phone: "55-9876-5432".to_string(),
            vehicle_make: "Nissan".to_string(),
            vehicle_model: "March".to_string(),
            plates: "ABC-123".to_string(),
        },
        Courier {
            id: "REP-002".to_string(),
            code: "R-02".to_string(),
            name: "Ana Gómez".to_string(),
            phone: "55-8765-4321".to_string(),
            vehicle_make: "Italika".to_string(),
            vehicle_model: "DS150".to_string(),
            plates: "XYZ-456".to_string(),
        },
    ];

    let zones = vec![
        Zone {
            id: "Z-01".to_string(),
            country: "México".to_string(),
            state: "Ciudad de México".to_string(),
            city: "Venustiano Carranza".to_string(),
        },
        Zone {
            id: "Z-02".to_string(),
            country: "México".to_string(),
            state: "Jalisco".to_string(),
            city: "Guadalajara".to_string(),
        },
        Zone {
            id: "Z-03".to_string(),
            country: "México".to_string(),
            state: "Nuevo León".to_string(),
            city: "Monterrey".to_string(),
        },
    ];

    let client_accounts = vec![
        ClientAccount {
            id: "CLI-001".to_string(),
            name: "Global Imports".to_string(),
            phone: "555-0101".to_string(),
            email: "contact@globalimports.com".to_string(),
            sales: 25,
            total_amount: 75200.50,
            orders: 28,
        },
        ClientAccount {
            id: "CLI-002".to_string(),
            name: "Creative Minds".to_string(),
            phone: "555-0201".to_string(),
            email: "hello@creativeminds.dev".to_string(),
            sales: 12,
            total_amount: 32500.00,
            orders: 15,
        },
        ClientAccount {
            id: "CLI-003".to_string(),
            name: "Futura Tech".to_string(),
            phone: "555-0301".to_string(),
            email: "info@futuratech.io".to_string(),
            sales: 5,
            total_amount: 12800.75,
            orders: 6,
        },
    ];

    let products = vec![
        Product {
            id: "PROD-001".to_string(),
            name: "Ramo de 24 Rosas Rojas".to_string(),
            sku: "RAM-ROS-01".to_string(),
            ingredients: "24 Rosas rojas, follaje, listón".to_string(),
            category: "Ramos".to_string(),
            list_price: 750.00,
            color: "Rojo".to_string(),
            blurb: "Clásico ramo de rosas rojas para expresar amor.".to_string(),
            image_url: "https://via.placeholder.com/150/FF0000/FFFFFF?Text=Rosas".to_string(),
        },
        Product {
            id: "PROD-002".to_string(),
            name: "Arreglo de Girasoles".to_string(),
            sku: "ARR-GIR-01".to_string(),
            ingredients: "12 Girasoles, base de cerámica, follaje".to_string(),
            category: "Arreglos Florales".to_string(),
            list_price: 900.00,
            color: "Amarillo".to_string(),
            blurb: "Arreglo vibrante para alegrar el día.".to_string(),
            image_url: "https://via.placeholder.com/150/FFFF00/000000?Text=Girasol".to_string(),
        },
        Product {
            id: "PROD-003".to_string(),
            name: "Orquídea Phalaenopsis".to_string(),
            sku: "PLA-ORQ-01".to_string(),
            ingredients: "1 Orquídea Phalaenopsis, maceta de cristal".to_string(),
            category: "Plantas".to_string(),
            list_price: 1200.00,
            color: "Blanco".to_string(),
            blurb: "Planta elegante y de larga duración.".to_string(),
            image_url: "https://via.placeholder.com/150/FFFFFF/000000?Text=Orquidea".to_string(),
        },
    ];

    let profile = CompanyProfile {
        store_name: "Florería El Jardín de Venus".to_string(),
        phone: "55-1122-3344".to_string(),
        whatsapp: "5215511223344".to_string(),
        email: "ventas@jardindevenus.com".to_string(),
        country: "México".to_string(),
        state: "Ciudad de México".to_string(),
        city: "Coyoacán".to_string(),
        district: "Del Carmen".to_string(),
        street: "Av. Hidalgo 123, Local A".to_string(),
        maps_url: "https://goo.gl/maps/perfilexample".to_string(),
    };

    Catalog::seed(
        payment_methods,
        couriers,
        zones,
        client_accounts,
        products,
        profile,
    )
}
