//! Static province → municipality catalog.
//!
//! The table is defined at process start and never mutated. Lookup by an
//! unknown or empty slug is a normal absent result, not an error.

/// Top-level geographic grouping with its municipalities in display order.
pub struct Province {
    pub slug: &'static str,
    pub name: &'static str,
    pub municipalities: &'static [&'static str],
}

pub static PROVINCES: &[Province] = &[
    Province {
        slug: "pinar-del-rio",
        name: "Pinar del Río",
        municipalities: &[
            "Pinar del Río", "Consolación del Sur", "San Juan y Martínez", "San Luis",
            "Mantua", "Minas de Matahambre", "Viñales", "La Palma", "Los Palacios",
            "Sandino", "Guane", "Candelaria", "Bahía Honda", "Artemisa", "Guanajay",
            "Mariel", "Bauta", "San Antonio de los Baños", "Güira de Melena",
            "Alquízar", "Caimito", "San Cristóbal",
        ],
    },
    Province {
        slug: "artemisa",
        name: "Artemisa",
        municipalities: &[
            "Artemisa", "Bahía Honda", "Candelaria", "Mariel", "Guanajay", "Bauta",
            "San Antonio de los Baños", "Güira de Melena", "Alquízar", "Caimito",
            "San Cristóbal",
        ],
    },
    Province {
        slug: "mayabeque",
        name: "Mayabeque",
        municipalities: &[
            "San José de las Lajas", "Batabanó", "Bejucal", "Güines", "Jaruco",
            "Madruga", "Melena del Sur", "Nueva Paz", "Quivicán",
            "San Nicolás de Bari", "Santa Cruz del Norte",
        ],
    },
    Province {
        slug: "la-habana",
        name: "La Habana",
        municipalities: &[
            "Playa", "Plaza de la Revolución", "Centro Habana", "La Habana Vieja",
            "Regla", "La Habana del Este", "Guanabacoa", "San Miguel del Padrón",
            "Diez de Octubre", "Cerro", "Marianao", "La Lisa", "Boyeros",
            "Arroyo Naranjo", "Cotorro",
        ],
    },
    Province {
        slug: "matanzas",
        name: "Matanzas",
        municipalities: &[
            "Matanzas", "Cárdenas", "Colón", "Perico", "Jovellanos",
            "Pedro Betancourt", "Limonar", "Unión de Reyes", "Ciénaga de Zapata",
            "Jagüey Grande", "Calimete", "Los Arabos", "Martí", "Varadero",
        ],
    },
    Province {
        slug: "villa-clara",
        name: "Villa Clara",
        municipalities: &[
            "Santa Clara", "Sagua la Grande", "Placetas", "Camajuaní", "Caibarién",
            "Remedios", "Quemado de Güines", "Encrucijada", "Cifuentes",
            "Santo Domingo", "Ranchuelo", "Manicaragua", "Corralillo",
        ],
    },
    Province {
        slug: "cienfuegos",
        name: "Cienfuegos",
        municipalities: &[
            "Cienfuegos", "Aguada de Pasajeros", "Rodas", "Palmira", "Lajas",
            "Cruces", "Cumanayagua", "Abreus",
        ],
    },
    Province {
        slug: "sancti-spiritus",
        name: "Sancti Spíritus",
        municipalities: &[
            "Sancti Spíritus", "Trinidad", "Cabaiguán", "Fomento", "Yaguajay",
            "Jatibonico", "La Sierpe",
        ],
    },
    Province {
        slug: "ciego-de-avila",
        name: "Ciego de Ávila",
        municipalities: &[
            "Ciego de Ávila", "Morón", "Chambas", "Majagua", "Ciro Redondo",
            "Florencia", "Venezuela", "Baraguá", "Primero de Enero", "Bolivia",
        ],
    },
    Province {
        slug: "camaguey",
        name: "Camagüey",
        municipalities: &[
            "Camagüey", "Florida", "Vertientes", "Esmeralda", "Sierra de Cubitas",
            "Minas", "Najasa", "Guáimaro", "Carlos Manuel de Céspedes", "Sibanicú",
            "Nuevitas", "Santa Cruz del Sur",
        ],
    },
    Province {
        slug: "las-tunas",
        name: "Las Tunas",
        municipalities: &[
            "Las Tunas", "Puerto Padre", "Jesús Menéndez", "Majibacoa", "Jobabo",
            "Colombia", "Amancio",
        ],
    },
    Province {
        slug: "holguin",
        name: "Holguín",
        municipalities: &[
            "Holguín", "Banes", "Antilla", "Báguanos", "Cacocum", "Calixto García",
            "Cueto", "Frank País", "Gibara", "Mayarí", "Moa", "Rafael Freyre",
            "Sagua de Tánamo", "Urbano Noris",
        ],
    },
    Province {
        slug: "granma",
        name: "Granma",
        municipalities: &[
            "Bayamo", "Manzanillo", "Campechuela", "Media Luna", "Niquero", "Pilón",
            "Bartolomé Masó", "Buey Arriba", "Guisa", "Jiguaní", "Yara",
        ],
    },
    Province {
        slug: "santiago-de-cuba",
        name: "Santiago de Cuba",
        municipalities: &[
            "Santiago de Cuba", "Palma Soriano", "San Luis", "Songo-La Maya",
            "El Cobre", "Guamá", "El Salvador", "Mella", "Tercer Frente",
            "Contramaestre",
        ],
    },
    Province {
        slug: "guantanamo",
        name: "Guantánamo",
        municipalities: &[
            "Guantánamo", "Baracoa", "Imías", "Maisí", "El Salvador", "Yateras",
            "San Antonio del Sur", "Manuel Tames", "Caimanera", "Niceto Pérez",
        ],
    },
    Province {
        slug: "isla-de-la-juventud",
        name: "Isla de la Juventud",
        municipalities: &["Nueva Gerona", "Isla de la Juventud"],
    },
];

pub fn lookup(slug: &str) -> Option<&'static Province> {
    if slug.is_empty() {
        return None;
    }
    PROVINCES.iter().find(|p| p.slug == slug)
}

/// Derive a storage-safe slug from a display name: Unicode lowercase with
/// whitespace runs collapsed to a single hyphen. Diacritics are preserved
/// ("Viñales" → "viñales", "Güines" → "güines").
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_province() {
        let p = lookup("la-habana").unwrap();
        assert_eq!(p.name, "La Habana");
        assert_eq!(p.municipalities[0], "Playa");
    }

    #[test]
    fn lookup_unknown_or_empty_is_absent() {
        assert!(lookup("florida-keys").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn slugify_preserves_diacritics() {
        assert_eq!(slugify("Viñales"), "viñales");
        assert_eq!(slugify("Güines"), "güines");
        assert_eq!(slugify("San Antonio de los Baños"), "san-antonio-de-los-baños");
    }

    #[test]
    fn pinar_del_rio_exposes_vinales() {
        let p = lookup("pinar-del-rio").unwrap();
        assert!(p.municipalities.contains(&"Viñales"));
    }
}
