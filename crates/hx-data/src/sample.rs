//! Create a sample heritage database with curated demo records

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use crate::{DataError, Result};

/// Marks a database as written by [`create_sample_database`]
const SAMPLE_MARKER: &str = "heritage_sample";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS heritage_sample (created_at TEXT NOT NULL);

    DROP TABLE IF EXISTS art_forms;
    DROP TABLE IF EXISTS cultural_destinations;
    DROP TABLE IF EXISTS tourism_trends;
    DROP TABLE IF EXISTS government_initiatives;
    DROP TABLE IF EXISTS artisan_programs;

    CREATE TABLE art_forms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        art_form TEXT NOT NULL,
        state TEXT NOT NULL,
        category TEXT NOT NULL,
        origin TEXT,
        materials TEXT,
        description TEXT,
        significance TEXT,
        image_path TEXT,
        video_url TEXT
    );

    CREATE TABLE cultural_destinations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        state TEXT NOT NULL,
        category TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        annual_visitors INTEGER NOT NULL,
        significance REAL NOT NULL,
        unique_aspect TEXT,
        best_season TEXT,
        image_path TEXT
    );

    CREATE TABLE tourism_trends (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        site_name TEXT NOT NULL,
        month TEXT NOT NULL,
        visitor_count INTEGER NOT NULL
    );

    CREATE TABLE government_initiatives (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        initiative_name TEXT NOT NULL,
        ministry TEXT,
        year_launched INTEGER NOT NULL,
        budget REAL NOT NULL,
        impact_description TEXT
    );

    CREATE TABLE artisan_programs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        program_name TEXT NOT NULL,
        organization TEXT,
        art_forms_supported TEXT,
        participation_details TEXT,
        website_url TEXT
    );
";

// (art_form, state, category, origin, materials, description, significance, image, video)
const ART_FORMS: &[(&str, &str, &str, &str, &str, &str, &str, &str, Option<&str>)] = &[
    ("Madhubani", "Bihar", "Painting", "Mithila region", "Natural dyes, handmade paper, twigs",
     "Dense line paintings of deities, nature and village ritual",
     "Painted by women of Mithila for weddings and festivals", "madhubani.jpg", None),
    ("Blue Pottery", "Rajasthan", "Craft", "Jaipur", "Quartz, glass, fuller's earth",
     "Glazed pottery in cobalt blue with Persian floral motifs",
     "Turko-Persian technique adopted at the Jaipur court", "blue_pottery.jpg", None),
    ("Phad", "Rajasthan", "Painting", "Bhilwara", "Cloth scrolls, vegetable colours",
     "Long scroll paintings narrating folk epics",
     "Carried by priest-singers as portable temples", "phad.jpg", None),
    ("Kathakali", "Kerala", "Performance", "Kottarakkara", "Elaborate costume, rice-paste makeup",
     "Classical dance-drama of gesture and facial expression",
     "Enacts episodes of the Mahabharata and Ramayana", "kathakali.jpg",
     Some("https://www.youtube.com/watch?v=kathakali")),
    ("Pattachitra", "Odisha", "Painting", "Raghurajpur", "Treated cloth, mineral pigments",
     "Cloth-based scroll painting with fine mythological detail",
     "Linked to the worship of Jagannath at Puri", "pattachitra.jpg", None),
    ("Warli", "Maharashtra", "Painting", "Thane and Palghar", "Rice paste, mud walls",
     "Geometric figures of daily life painted in white",
     "Tribal record of harvest, marriage and community", "warli.jpg", None),
    ("Chhau", "Odisha", "Performance", "Mayurbhanj", "Masks, martial costume",
     "Masked dance blending martial arts and folk themes",
     "Inscribed on UNESCO's intangible heritage list", "chhau.jpg",
     Some("https://www.youtube.com/watch?v=chhau")),
    ("Kantha", "West Bengal", "Textile", "Rural Bengal", "Old saris, running stitch",
     "Quilted embroidery reusing layered cloth",
     "Thrift turned into storytelling by rural women", "kantha.jpg", None),
];

// (name, state, category, lat, lon, annual_visitors, significance, unique_aspect, best_season, image)
const DESTINATIONS: &[(&str, &str, &str, f64, f64, i64, f64, &str, &str, &str)] = &[
    ("Hampi", "Karnataka", "Archaeological", 15.335, 76.460, 550_000, 9.6,
     "Boulder-strewn ruins of the Vijayanagara capital", "October to February", "hampi.jpg"),
    ("Konark Sun Temple", "Odisha", "Temple", 19.887, 86.094, 2_500_000, 9.4,
     "A stone chariot of the Sun god with 24 carved wheels", "November to March", "konark.jpg"),
    ("Khajuraho", "Madhya Pradesh", "Temple", 24.852, 79.934, 400_000, 9.2,
     "Nagara-style temples with intricate sculpture", "October to March", "khajuraho.jpg"),
    ("Raghurajpur", "Odisha", "Craft Village", 19.838, 85.857, 6_500, 8.7,
     "Every house is a Pattachitra studio", "October to February", "raghurajpur.jpg"),
    ("Majuli", "Assam", "River Island", 26.950, 94.167, 8_200, 8.9,
     "Vaishnavite satras and mask-making traditions", "October to March", "majuli.jpg"),
    ("Lepakshi", "Andhra Pradesh", "Temple", 13.805, 77.609, 9_500, 8.3,
     "Hanging pillar and Vijayanagara murals", "November to February", "lepakshi.jpg"),
    ("Bhimbetka", "Madhya Pradesh", "Archaeological", 22.938, 77.613, 4_800, 9.0,
     "Rock shelters with paintings over 10,000 years old", "October to March", "bhimbetka.jpg"),
    ("Unakoti", "Tripura", "Archaeological", 24.316, 92.066, 3_100, 8.1,
     "Giant rock-cut reliefs of Shiva in the forest", "October to March", "unakoti.jpg"),
    ("Chettinad", "Tamil Nadu", "Heritage Town", 10.161, 78.778, 12_000, 7.9,
     "Palatial merchant mansions and Athangudi tiles", "November to February", "chettinad.jpg"),
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// (site, visitors per month starting January)
const TOURISM: &[(&str, [i64; 12])] = &[
    ("Hampi", [78_000, 71_000, 52_000, 30_000, 21_000, 14_000, 12_500, 13_000, 18_000, 46_000, 88_000, 96_000]),
    ("Konark Sun Temple", [310_000, 260_000, 230_000, 160_000, 120_000, 95_000, 90_000, 98_000, 130_000, 240_000, 330_000, 400_000]),
    ("Majuli", [1_200, 1_050, 900, 600, 320, 150, 90, 110, 260, 800, 1_250, 1_400]),
];

// (name, ministry, year, budget, impact)
const INITIATIVES: &[(&str, &str, i64, f64, &str)] = &[
    ("PRASHAD", "Ministry of Tourism", 2014, 14_000_000_000.0,
     "Develops pilgrimage and heritage destinations with visitor amenities"),
    ("HRIDAY", "Ministry of Housing and Urban Affairs", 2015, 5_000_000_000.0,
     "Revitalised the core heritage zones of twelve cities"),
    ("Adopt a Heritage", "Ministry of Tourism", 2017, 2_500_000_000.0,
     "Invites companies to maintain monuments as Monument Mitras"),
    ("Swadesh Darshan", "Ministry of Tourism", 2015, 54_945_000_000.0,
     "Builds theme-based tourist circuits across states"),
];

// (program, organization, art forms, participation, url)
const PROGRAMS: &[(&str, &str, &str, &str, &str)] = &[
    ("Guru Shishya Parampara", "Ministry of Textiles", "Handloom, embroidery, metal craft",
     "Apprentice with a master artisan through state handicraft offices",
     "https://handicrafts.nic.in"),
    ("Craft Revival Trust", "Craft Revival Trust", "Documented crafts across India",
     "Volunteer for documentation or buy from listed artisan groups",
     "https://www.craftrevival.org"),
    ("Dastkar Bazaars", "Dastkar", "Textiles, pottery, folk painting",
     "Shop at travelling bazaars that pay artisans directly",
     "https://www.dastkar.org"),
];

/// True when the database at `path` holds tables but no sample marker
fn holds_other_data(conn: &Connection) -> Result<bool> {
    let (tables, marked): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(name = ?1), 0) FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        [SAMPLE_MARKER],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(tables > 0 && marked == 0)
}

/// Create (or recreate) the sample database at `path`.
/// An existing database that was not created here is left untouched.
pub fn create_sample_database(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut conn = Connection::open(path)?;
    if holds_other_data(&conn)? {
        return Err(DataError::NotSampleStore {
            path: path.display().to_string(),
        });
    }
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO art_forms (art_form, state, category, origin, materials, description,
                                    significance, image_path, video_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for (name, state, category, origin, materials, description, significance, image, video) in ART_FORMS {
            stmt.execute(params![name, state, category, origin, materials, description, significance, image, video])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO cultural_destinations (name, state, category, latitude, longitude,
                                                annual_visitors, significance, unique_aspect,
                                                best_season, image_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for (name, state, category, lat, lon, visitors, significance, aspect, season, image) in DESTINATIONS {
            stmt.execute(params![name, state, category, lat, lon, visitors, significance, aspect, season, image])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO tourism_trends (site_name, month, visitor_count) VALUES (?1, ?2, ?3)",
        )?;
        for (site, counts) in TOURISM {
            for (month, count) in MONTHS.iter().zip(counts) {
                stmt.execute(params![site, month, count])?;
            }
        }

        let mut stmt = tx.prepare(
            "INSERT INTO government_initiatives (initiative_name, ministry, year_launched, budget,
                                                 impact_description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (name, ministry, year, budget, impact) in INITIATIVES {
            stmt.execute(params![name, ministry, year, budget, impact])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO artisan_programs (program_name, organization, art_forms_supported,
                                           participation_details, website_url)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (name, organization, supported, participation, url) in PROGRAMS {
            stmt.execute(params![name, organization, supported, participation, url])?;
        }
    }
    tx.execute("DELETE FROM heritage_sample", [])?;
    tx.execute("INSERT INTO heritage_sample (created_at) VALUES (datetime('now'))", [])?;
    tx.commit()?;

    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_art_forms_state ON art_forms(state);
        CREATE INDEX IF NOT EXISTS idx_tourism_site ON tourism_trends(site_name);
        ",
    )?;

    info!("Sample heritage database created at {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn test_sample_database_is_recreated_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("heritage.db");

        create_sample_database(&path).unwrap();
        create_sample_database(&path).unwrap();

        let conn = Connection::open(&path).unwrap();
        assert_eq!(count(&conn, "art_forms"), ART_FORMS.len() as i64);
        assert_eq!(count(&conn, "tourism_trends"), (TOURISM.len() * 12) as i64);
        assert_eq!(count(&conn, "artisan_programs"), PROGRAMS.len() as i64);
        assert_eq!(count(&conn, SAMPLE_MARKER), 1);
    }

    #[test]
    fn test_existing_store_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heritage.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch(
                "CREATE TABLE art_forms (art_form TEXT);
                 INSERT INTO art_forms VALUES ('Curated Warli');",
            )
            .unwrap();

        let result = create_sample_database(&path);
        assert!(matches!(result, Err(DataError::NotSampleStore { .. })));

        let conn = Connection::open(&path).unwrap();
        let kept: String = conn
            .query_row("SELECT art_form FROM art_forms", [], |r| r.get(0))
            .unwrap();
        assert_eq!(kept, "Curated Warli");
        assert_eq!(count(&conn, "art_forms"), 1);
    }

    #[test]
    fn test_sample_goes_to_its_own_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = StoreConfig {
            database: dir.path().join("heritage.db"),
            sample_database: dir.path().join("data").join("heritage_sample.db"),
            ..StoreConfig::default()
        };
        Connection::open(&store.database)
            .unwrap()
            .execute_batch("CREATE TABLE art_forms (art_form TEXT); INSERT INTO art_forms VALUES ('Curated');")
            .unwrap();

        create_sample_database(&store.sample_database).unwrap();

        let configured = Connection::open(&store.database).unwrap();
        assert_eq!(count(&configured, "art_forms"), 1);
        let sample = Connection::open(&store.sample_database).unwrap();
        assert_eq!(count(&sample, "art_forms"), ART_FORMS.len() as i64);
    }
}
