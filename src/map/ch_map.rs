//! The fixed Swiss map: stations, routes and tickets.
//!
//! The order of `routes()` and `tickets()` is canonical: the wire encodes a
//! route or ticket as its index in these lists, so both ends of a connection
//! must agree on them.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::route::{Level, Route};
use super::station::Station;
use super::ticket::{Ticket, Trip};
use crate::cards::Color;
use crate::core::Multiset;

const BAD: Station = Station::new(0, "Baden");
const BAL: Station = Station::new(1, "Bâle");
const BEL: Station = Station::new(2, "Bellinzone");
const BER: Station = Station::new(3, "Berne");
const BRI: Station = Station::new(4, "Brigue");
const BRU: Station = Station::new(5, "Brusio");
const COI: Station = Station::new(6, "Coire");
const DAV: Station = Station::new(7, "Davos");
const DEL: Station = Station::new(8, "Delémont");
const FRI: Station = Station::new(9, "Fribourg");
const GEN: Station = Station::new(10, "Genève");
const INT: Station = Station::new(11, "Interlaken");
const KRE: Station = Station::new(12, "Kreuzlingen");
const LAU: Station = Station::new(13, "Lausanne");
const LCF: Station = Station::new(14, "La Chaux-de-Fonds");
const LOC: Station = Station::new(15, "Locarno");
const LUC: Station = Station::new(16, "Lucerne");
const LUG: Station = Station::new(17, "Lugano");
const MAR: Station = Station::new(18, "Martigny");
const NEU: Station = Station::new(19, "Neuchâtel");
const OLT: Station = Station::new(20, "Olten");
const PFA: Station = Station::new(21, "Pfäffikon");
const SAR: Station = Station::new(22, "Sargans");
const SCE: Station = Station::new(23, "Schaffhouse");
const SCZ: Station = Station::new(24, "Schwyz");
const SIO: Station = Station::new(25, "Sion");
const SOL: Station = Station::new(26, "Soleure");
const STG: Station = Station::new(27, "Saint-Gall");
const VAD: Station = Station::new(28, "Vaduz");
const WAS: Station = Station::new(29, "Wassen");
const WIN: Station = Station::new(30, "Winterthour");
const YVE: Station = Station::new(31, "Yverdon");
const ZOU: Station = Station::new(32, "Zoug");
const ZUR: Station = Station::new(33, "Zürich");

const DE1: Station = Station::new(34, "Allemagne");
const DE2: Station = Station::new(35, "Allemagne");
const DE3: Station = Station::new(36, "Allemagne");
const DE4: Station = Station::new(37, "Allemagne");
const DE5: Station = Station::new(38, "Allemagne");
const AT1: Station = Station::new(39, "Autriche");
const AT2: Station = Station::new(40, "Autriche");
const AT3: Station = Station::new(41, "Autriche");
const IT1: Station = Station::new(42, "Italie");
const IT2: Station = Station::new(43, "Italie");
const IT3: Station = Station::new(44, "Italie");
const IT4: Station = Station::new(45, "Italie");
const IT5: Station = Station::new(46, "Italie");
const FR1: Station = Station::new(47, "France");
const FR2: Station = Station::new(48, "France");
const FR3: Station = Station::new(49, "France");
const FR4: Station = Station::new(50, "France");

const STATIONS: [Station; 51] = [
    BAD, BAL, BEL, BER, BRI, BRU, COI, DAV, DEL, FRI, GEN, INT, KRE, LAU, LCF, LOC, LUC, LUG, MAR, NEU, OLT, PFA,
    SAR, SCE, SCZ, SIO, SOL, STG, VAD, WAS, WIN, YVE, ZOU, ZUR, DE1, DE2, DE3, DE4, DE5, AT1, AT2, AT3, IT1, IT2,
    IT3, IT4, IT5, FR1, FR2, FR3, FR4,
];

const DE: [Station; 5] = [DE1, DE2, DE3, DE4, DE5];
const AT: [Station; 3] = [AT1, AT2, AT3];
const IT: [Station; 5] = [IT1, IT2, IT3, IT4, IT5];
const FR: [Station; 4] = [FR1, FR2, FR3, FR4];

/// The static map shared by both ends of a match.
#[derive(Debug)]
pub struct ChMap {
    routes: Vec<Route>,
    tickets: Vec<Ticket>,
    route_index: FxHashMap<&'static str, usize>,
}

impl ChMap {
    /// The map, built on first use.
    pub fn get() -> &'static ChMap {
        static MAP: OnceLock<ChMap> = OnceLock::new();
        MAP.get_or_init(ChMap::build)
    }

    fn build() -> Self {
        let routes = build_routes();
        let route_index = routes.iter().enumerate().map(|(i, r)| (r.id(), i)).collect();
        Self {
            routes,
            tickets: build_tickets(),
            route_index,
        }
    }

    /// Every station, ordered by id.
    #[must_use]
    pub fn stations(&self) -> &'static [Station] {
        &STATIONS
    }

    /// Every route, in canonical order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Every ticket, in canonical order.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Canonical index of a route.
    #[must_use]
    pub fn route_index(&self, route: &Route) -> Option<usize> {
        self.route_index.get(route.id()).copied()
    }

    /// Look up a route by its identifier.
    #[must_use]
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.route_index.get(id).map(|&i| &self.routes[i])
    }

    /// The ticket pool a match is played with.
    #[must_use]
    pub fn ticket_pool(&self) -> Multiset<Ticket> {
        self.tickets.iter().cloned().collect()
    }
}

fn build_routes() -> Vec<Route> {
    use Level::{Surface, Tunnel};

    let r = Route::new;
    vec![
        r("AT1_STG_1", AT1, STG, 4, Tunnel, None),
        r("AT2_VAD_1", AT2, VAD, 1, Tunnel, Some(Color::Red)),
        r("BAD_BAL_1", BAD, BAL, 3, Tunnel, Some(Color::Red)),
        r("BAD_OLT_1", BAD, OLT, 2, Surface, Some(Color::Violet)),
        r("BAD_ZUR_1", BAD, ZUR, 1, Surface, Some(Color::Yellow)),
        r("BAL_DE1_1", BAL, DE1, 1, Tunnel, Some(Color::Blue)),
        r("BAL_DEL_1", BAL, DEL, 2, Tunnel, Some(Color::Yellow)),
        r("BAL_OLT_1", BAL, OLT, 2, Tunnel, Some(Color::Orange)),
        r("BEL_LOC_1", BEL, LOC, 1, Tunnel, Some(Color::Black)),
        r("BEL_LUG_1", BEL, LUG, 1, Tunnel, Some(Color::Red)),
        r("BEL_LUG_2", BEL, LUG, 1, Tunnel, Some(Color::Yellow)),
        r("BEL_WAS_1", BEL, WAS, 4, Tunnel, None),
        r("BEL_WAS_2", BEL, WAS, 4, Tunnel, None),
        r("BER_BRI_1", BER, BRI, 4, Tunnel, None),
        r("BER_BRI_2", BER, BRI, 4, Tunnel, None),
        r("BER_FRI_1", BER, FRI, 1, Surface, Some(Color::Orange)),
        r("BER_FRI_2", BER, FRI, 1, Surface, Some(Color::Yellow)),
        r("BER_INT_1", BER, INT, 3, Surface, Some(Color::Blue)),
        r("BER_LUC_1", BER, LUC, 4, Surface, None),
        r("BER_LUC_2", BER, LUC, 4, Surface, None),
        r("BER_NEU_1", BER, NEU, 2, Surface, Some(Color::Red)),
        r("BER_SOL_1", BER, SOL, 2, Surface, Some(Color::Black)),
        r("BRI_INT_1", BRI, INT, 2, Tunnel, Some(Color::White)),
        r("BRI_IT5_1", BRI, IT5, 3, Tunnel, Some(Color::Green)),
        r("BRI_LOC_1", BRI, LOC, 6, Tunnel, None),
        r("BRI_SIO_1", BRI, SIO, 3, Tunnel, Some(Color::Black)),
        r("BRI_WAS_1", BRI, WAS, 4, Tunnel, Some(Color::Red)),
        r("BRU_COI_1", BRU, COI, 5, Tunnel, None),
        r("BRU_DAV_1", BRU, DAV, 4, Tunnel, Some(Color::Blue)),
        r("BRU_IT2_1", BRU, IT2, 2, Tunnel, Some(Color::Green)),
        r("COI_DAV_1", COI, DAV, 2, Tunnel, Some(Color::Violet)),
        r("COI_SAR_1", COI, SAR, 1, Tunnel, Some(Color::White)),
        r("COI_WAS_1", COI, WAS, 5, Tunnel, None),
        r("DAV_AT3_1", DAV, AT3, 3, Tunnel, None),
        r("DAV_IT1_1", DAV, IT1, 3, Tunnel, None),
        r("DAV_SAR_1", DAV, SAR, 3, Tunnel, Some(Color::Black)),
        r("DE2_SCE_1", DE2, SCE, 1, Surface, Some(Color::Yellow)),
        r("DE3_KRE_1", DE3, KRE, 1, Surface, Some(Color::Orange)),
        r("DE4_KRE_1", DE4, KRE, 1, Surface, Some(Color::White)),
        r("DE5_STG_1", DE5, STG, 2, Surface, None),
        r("DEL_FR4_1", DEL, FR4, 2, Tunnel, Some(Color::Black)),
        r("DEL_LCF_1", DEL, LCF, 3, Tunnel, Some(Color::White)),
        r("DEL_SOL_1", DEL, SOL, 1, Tunnel, Some(Color::Violet)),
        r("FR1_MAR_1", FR1, MAR, 2, Tunnel, None),
        r("FR2_GEN_1", FR2, GEN, 1, Surface, Some(Color::Yellow)),
        r("FR3_LCF_1", FR3, LCF, 2, Tunnel, Some(Color::Green)),
        r("FRI_LAU_1", FRI, LAU, 3, Surface, Some(Color::Red)),
        r("FRI_LAU_2", FRI, LAU, 3, Surface, Some(Color::Violet)),
        r("GEN_LAU_1", GEN, LAU, 4, Surface, Some(Color::Blue)),
        r("GEN_LAU_2", GEN, LAU, 4, Surface, Some(Color::White)),
        r("GEN_YVE_1", GEN, YVE, 6, Surface, None),
        r("INT_LUC_1", INT, LUC, 4, Surface, Some(Color::Violet)),
        r("IT3_LUG_1", IT3, LUG, 2, Tunnel, Some(Color::White)),
        r("IT4_LOC_1", IT4, LOC, 2, Tunnel, Some(Color::Orange)),
        r("KRE_SCE_1", KRE, SCE, 3, Tunnel, Some(Color::Violet)),
        r("KRE_STG_1", KRE, STG, 1, Surface, Some(Color::Green)),
        r("KRE_WIN_1", KRE, WIN, 2, Surface, Some(Color::Yellow)),
        r("LAU_MAR_1", LAU, MAR, 4, Tunnel, Some(Color::Orange)),
        r("LAU_NEU_1", LAU, NEU, 4, Surface, None),
        r("LCF_NEU_1", LCF, NEU, 1, Tunnel, Some(Color::Orange)),
        r("LCF_YVE_1", LCF, YVE, 3, Tunnel, Some(Color::Yellow)),
        r("LOC_LUG_1", LOC, LUG, 1, Tunnel, Some(Color::Violet)),
        r("LUC_OLT_1", LUC, OLT, 3, Surface, Some(Color::Green)),
        r("LUC_SCZ_1", LUC, SCZ, 1, Surface, Some(Color::Blue)),
        r("LUC_ZOU_1", LUC, ZOU, 1, Surface, Some(Color::Orange)),
        r("LUC_ZOU_2", LUC, ZOU, 1, Surface, Some(Color::Yellow)),
        r("MAR_SIO_1", MAR, SIO, 2, Tunnel, Some(Color::Green)),
        r("NEU_SOL_1", NEU, SOL, 4, Surface, Some(Color::Green)),
        r("NEU_YVE_1", NEU, YVE, 2, Surface, Some(Color::Black)),
        r("OLT_SOL_1", OLT, SOL, 1, Surface, Some(Color::Blue)),
        r("OLT_ZUR_1", OLT, ZUR, 3, Surface, Some(Color::White)),
        r("PFA_SAR_1", PFA, SAR, 3, Surface, Some(Color::Yellow)),
        r("PFA_ZUR_1", PFA, ZUR, 2, Surface, Some(Color::Blue)),
        r("SAR_VAD_1", SAR, VAD, 1, Tunnel, Some(Color::Orange)),
        r("SCE_WIN_1", SCE, WIN, 1, Surface, Some(Color::Black)),
        r("SCE_ZUR_1", SCE, ZUR, 3, Surface, Some(Color::Orange)),
        r("SCZ_WAS_1", SCZ, WAS, 2, Tunnel, Some(Color::Green)),
        r("SCZ_WAS_2", SCZ, WAS, 2, Tunnel, Some(Color::Yellow)),
        r("SCZ_ZOU_1", SCZ, ZOU, 1, Surface, Some(Color::Black)),
        r("SCZ_ZOU_2", SCZ, ZOU, 1, Surface, Some(Color::White)),
        r("STG_VAD_1", STG, VAD, 2, Tunnel, Some(Color::Blue)),
        r("STG_WIN_1", STG, WIN, 3, Surface, Some(Color::Red)),
        r("STG_ZUR_1", STG, ZUR, 4, Surface, Some(Color::Black)),
        r("WIN_ZUR_1", WIN, ZUR, 1, Surface, Some(Color::Blue)),
        r("WIN_ZUR_2", WIN, ZUR, 1, Surface, Some(Color::Violet)),
        r("ZOU_ZUR_1", ZOU, ZUR, 1, Surface, Some(Color::Green)),
        r("ZOU_ZUR_2", ZOU, ZUR, 1, Surface, Some(Color::Red)),
    ]
}

fn neighbours(from: &[Station], countries: [(&[Station], u32); 4]) -> Ticket {
    let trips = countries
        .iter()
        .flat_map(|&(to, points)| Trip::all(from, to, points))
        .collect();
    Ticket::new(trips)
}

fn build_tickets() -> Vec<Ticket> {
    let t = Ticket::single;
    vec![
        t(BAL, BER, 5),
        t(BAL, BRI, 10),
        t(BAL, STG, 8),
        t(BER, COI, 10),
        t(BER, LUG, 12),
        t(BER, SCZ, 5),
        t(BER, ZUR, 6),
        t(FRI, LUC, 5),
        t(GEN, BAL, 13),
        t(GEN, BER, 8),
        t(GEN, SIO, 10),
        t(GEN, ZUR, 14),
        t(INT, WIN, 7),
        t(KRE, ZUR, 3),
        t(LAU, INT, 7),
        t(LAU, LUC, 8),
        t(LAU, STG, 13),
        t(LCF, BER, 3),
        t(LCF, LUC, 7),
        t(LCF, ZUR, 8),
        t(LUC, VAD, 6),
        t(LUC, ZUR, 2),
        t(LUG, COI, 10),
        t(NEU, WIN, 9),
        t(OLT, SCE, 5),
        t(SCE, MAR, 15),
        t(SCE, STG, 4),
        t(SCE, ZOU, 3),
        t(STG, BRU, 9),
        t(WIN, SCZ, 3),
        t(ZUR, BAL, 4),
        t(ZUR, BRI, 11),
        t(ZUR, LUG, 9),
        t(ZUR, VAD, 6),
        neighbours(&[BER], [(&DE, 6), (&AT, 11), (&IT, 8), (&FR, 5)]),
        neighbours(&[BER], [(&DE, 6), (&AT, 11), (&IT, 8), (&FR, 5)]),
        neighbours(&[COI], [(&DE, 6), (&AT, 3), (&IT, 5), (&FR, 12)]),
        neighbours(&[LUG], [(&DE, 12), (&AT, 13), (&IT, 2), (&FR, 14)]),
        neighbours(&[ZUR], [(&DE, 3), (&AT, 7), (&IT, 11), (&FR, 10)]),
        Ticket::new(
            Trip::all(&FR, &DE, 5)
                .into_iter()
                .chain(Trip::all(&FR, &AT, 14))
                .chain(Trip::all(&FR, &IT, 11))
                .collect(),
        ),
        Ticket::new(Trip::all(&DE, &AT, 6).into_iter().chain(Trip::all(&DE, &IT, 13)).collect()),
        Ticket::new(Trip::all(&AT, &IT, 8)),
        Ticket::new(Trip::all(&IT, &FR, 11)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_ids_are_dense() {
        for (i, station) in ChMap::get().stations().iter().enumerate() {
            assert_eq!(station.id(), i);
        }
    }

    #[test]
    fn test_route_ids_unique_and_indexed() {
        let map = ChMap::get();
        assert_eq!(map.routes().len(), 87);
        for (i, route) in map.routes().iter().enumerate() {
            assert_eq!(map.route_index(route), Some(i));
        }
        assert_eq!(map.route("BER_FRI_1").map(|r| r.length()), Some(1));
        assert!(map.route("XXX_YYY_1").is_none());
    }

    #[test]
    fn test_tickets() {
        let map = ChMap::get();
        assert_eq!(map.tickets().len(), 43);
        assert_eq!(map.tickets()[6].text(), "Berne - Zürich (6)");
        assert_eq!(map.tickets()[41].text(), "Autriche - Italie (8)");
        assert_eq!(
            map.tickets()[34].text(),
            "Berne - {Allemagne (6), Autriche (11), France (5), Italie (8)}"
        );
        // Two identical Berne tickets are in the pool.
        assert_eq!(map.ticket_pool().count(&map.tickets()[34]), 2);
    }
}
