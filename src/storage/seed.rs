//! Built-in records for collections that start non-empty.
//!
//! A fresh deployment has no collection files on disk, but the branch
//! devices expect to log in and pick a branch immediately. These records
//! are what `load` hands back until the first write creates the real file.

use serde_json::{json, Value};

/// Default user accounts, one per role.
pub fn default_users() -> Vec<Value> {
    vec![
        json!({
            "id": "USR001",
            "username": "admin",
            "password": "admin123",
            "fullName": "Administrator",
            "email": "admin@dynapharm.com.na",
            "phone": "061-300877",
            "role": "admin",
            "branch": "townshop",
            "branches": ["townshop"]
        }),
        json!({
            "id": "USR002",
            "username": "consultant",
            "password": "consultant123",
            "fullName": "Dr. John Smith",
            "email": "consultant@dynapharm.com.na",
            "phone": "061-300877",
            "role": "consultant",
            "branch": "townshop",
            "branches": ["townshop", "khomasdal", "hochland-park"]
        }),
        json!({
            "id": "USR003",
            "username": "dispenser",
            "password": "dispenser123",
            "fullName": "Jane Doe",
            "email": "dispenser@dynapharm.com.na",
            "phone": "061-300877",
            "role": "dispenser",
            "branch": "townshop",
            "branches": ["townshop"]
        }),
    ]
}

/// The branch network as of the last manual sync with head office.
pub fn default_branches() -> Vec<Value> {
    vec![
        json!({
            "id": "townshop",
            "name": "TOWNSHOP (Head Office)",
            "location": "Shop No.1 Continental Building Independence Avenue - Windhoek",
            "phone": "814683999"
        }),
        json!({
            "id": "khomasdal",
            "name": "KHOMASDAL DPC",
            "location": "Shop No.2 Khomasdal Funky Town - Windhoek",
            "phone": "814682991"
        }),
        json!({
            "id": "katima",
            "name": "KATIMA DPC",
            "location": "Opposite Open Market Hospital Road, Katima",
            "phone": "817375818"
        }),
        json!({
            "id": "outapi",
            "name": "OUTAPI DPC",
            "location": "Okasilili Location in Christmas Building, Next Tolemeka Garage Main Road Oshakati - Outapi",
            "phone": "814685886"
        }),
        json!({
            "id": "ondangwa",
            "name": "ONDANGWA DPC",
            "location": "Shop No.3 Woerman Block Oluno, Opposite Fresco, Cash and Carry Entrance Ondangwa",
            "phone": "814685882"
        }),
        json!({
            "id": "okongo",
            "name": "OKONGO DPC",
            "location": "Handongo Festus Erf 333 Okongo Village Council",
            "phone": "814684935"
        }),
        json!({
            "id": "okahao",
            "name": "OKAHAO DPC",
            "location": "Iteka complex opposite Pep store Okahao - Oshakati main road",
            "phone": "814683963"
        }),
        json!({
            "id": "nkurenkuru",
            "name": "NKURENKURU DPC",
            "location": "Total Service Station, Next to Oluno Bar - Nkurenkuru",
            "phone": "814684939"
        }),
        json!({
            "id": "swakopmund",
            "name": "SWAKOPMUND DPC",
            "location": "Opposite Mondesa Usave Swakopmund",
            "phone": "814686806"
        }),
        json!({
            "id": "hochland-park",
            "name": "HOCHLAND PARK",
            "location": "House No.2 Robin Road, Taubern Glain Street, Next to OK Food Windhoek",
            "phone": "813207195"
        }),
        json!({
            "id": "rundu",
            "name": "RUNDU DPC",
            "location": "Shop No.6 Fish Building opposite, Dr. Romanus Kampungi Stadium",
            "phone": "814050125"
        }),
        json!({
            "id": "gobabis",
            "name": "GOBABIS",
            "location": "Shop No. Church Street Woerman Complex Gobabis",
            "phone": "814685905"
        }),
        json!({
            "id": "walvisbay",
            "name": "WALVISBAY",
            "location": "Shop No.6 Pelican Mall Shop Sam Nujoma Avenue",
            "phone": "814685894"
        }),
        json!({
            "id": "eenhana",
            "name": "EENHANA",
            "location": "Shop No.3 Tangi Complex, Next to Namibia Funeral Supply, Dimo Amaambo Street Eenhana",
            "phone": "814682049"
        }),
        json!({
            "id": "otjiwarongo",
            "name": "OTJIWARONGO DPC",
            "location": "Erindi Complex next to Spar",
            "phone": "814681997"
        }),
    ]
}
