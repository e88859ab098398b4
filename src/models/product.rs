/// Store item shown on the home page product cards.
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "recarga-cubacel-10",
        name: "Recarga Cubacel 10 USD",
        description: "Recarga de saldo para líneas Cubacel",
        price: 10.0,
    },
    Product {
        id: "recarga-nauta-5",
        name: "Recarga Nauta 5 USD",
        description: "Horas de navegación para cuentas Nauta",
        price: 5.0,
    },
    Product {
        id: "combo-familiar",
        name: "Combo Familiar",
        description: "Combo de alimentos con entrega a domicilio",
        price: 39.99,
    },
    Product {
        id: "paquete-aseo",
        name: "Paquete de Aseo",
        description: "Artículos de aseo personal e higiene",
        price: 24.5,
    },
];

pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}
