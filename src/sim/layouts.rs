//! Hand-authored level content
//!
//! Static tables only: extra platforms and robot placements for each of the
//! ten levels. Heights are given as a rise above the bottom of the screen.
//! Randomized placement (diamonds, power gems) happens in `level`.

use glam::Vec2;

use super::geom::Rect;
use super::robot::RobotKind;
use crate::consts::*;

/// Thickness of every floating platform
pub const PLATFORM_THICKNESS: f32 = 30.0;

/// A floating platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub rise: f32,
    pub w: f32,
}

impl PlatformSpec {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, SCREEN_HEIGHT - self.rise, self.w, PLATFORM_THICKNESS)
    }
}

/// A robot spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotSpec {
    pub x: f32,
    pub rise: f32,
    pub kind: RobotKind,
}

impl RobotSpec {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, SCREEN_HEIGHT - self.rise)
    }
}

/// Static content for one level
#[derive(Debug, Clone, Copy)]
pub struct LevelLayout {
    pub platforms: &'static [PlatformSpec],
    pub robots: &'static [RobotSpec],
}

/// Layout for level `n` (1-based). Out-of-range numbers clamp to the
/// nearest authored level.
pub fn layout(n: u32) -> LevelLayout {
    let (platforms, robots) = match n.clamp(1, LAST_LEVEL) {
        1 => (LEVEL_1_PLATFORMS, LEVEL_1_ROBOTS),
        2 => (LEVEL_2_PLATFORMS, LEVEL_2_ROBOTS),
        3 => (LEVEL_3_PLATFORMS, LEVEL_3_ROBOTS),
        4 => (LEVEL_4_PLATFORMS, LEVEL_4_ROBOTS),
        5 => (LEVEL_5_PLATFORMS, LEVEL_5_ROBOTS),
        6 => (LEVEL_6_PLATFORMS, LEVEL_6_ROBOTS),
        7 => (LEVEL_7_PLATFORMS, LEVEL_7_ROBOTS),
        8 => (LEVEL_8_PLATFORMS, LEVEL_8_ROBOTS),
        9 => (LEVEL_9_PLATFORMS, LEVEL_9_ROBOTS),
        _ => (LEVEL_10_PLATFORMS, LEVEL_10_ROBOTS),
    };
    LevelLayout { platforms, robots }
}

const fn plat(x: f32, rise: f32, w: f32) -> PlatformSpec {
    PlatformSpec { x, rise, w }
}

const fn normal(x: f32, rise: f32) -> RobotSpec {
    RobotSpec {
        x,
        rise,
        kind: RobotKind::Normal,
    }
}

const fn tough(x: f32, rise: f32) -> RobotSpec {
    RobotSpec {
        x,
        rise,
        kind: RobotKind::Tough,
    }
}

const LEVEL_1_PLATFORMS: &[PlatformSpec] = &[
    plat(300.0, 150.0, 120.0),
    plat(600.0, 200.0, 150.0),
    plat(1000.0, 180.0, 100.0),
    plat(1300.0, 280.0, 120.0),
    plat(1600.0, 320.0, 140.0),
    plat(2000.0, 250.0, 100.0),
    plat(2300.0, 400.0, 120.0),
];

const LEVEL_1_ROBOTS: &[RobotSpec] = &[
    normal(350.0, 80.0),
    normal(650.0, 80.0),
    normal(1050.0, 210.0),
    normal(1350.0, 310.0),
    normal(1650.0, 350.0),
    normal(2050.0, 280.0),
];

const LEVEL_2_PLATFORMS: &[PlatformSpec] = &[
    plat(200.0, 120.0, 100.0),
    plat(400.0, 200.0, 120.0),
    plat(600.0, 160.0, 80.0),
    plat(800.0, 280.0, 100.0),
    plat(1000.0, 220.0, 120.0),
    plat(1200.0, 350.0, 100.0),
    plat(1400.0, 180.0, 140.0),
    plat(1600.0, 400.0, 120.0),
    plat(1800.0, 300.0, 100.0),
    plat(2000.0, 450.0, 120.0),
    plat(2200.0, 250.0, 100.0),
];

const LEVEL_2_ROBOTS: &[RobotSpec] = &[
    normal(250.0, 80.0),
    normal(450.0, 230.0),
    normal(650.0, 190.0),
    normal(850.0, 310.0),
    normal(1050.0, 250.0),
    normal(1250.0, 380.0),
    normal(1450.0, 210.0),
    normal(1850.0, 330.0),
    normal(2050.0, 480.0),
];

const LEVEL_3_PLATFORMS: &[PlatformSpec] = &[
    plat(150.0, 100.0, 80.0),
    plat(300.0, 180.0, 100.0),
    plat(500.0, 260.0, 80.0),
    plat(700.0, 340.0, 100.0),
    plat(900.0, 420.0, 80.0),
    plat(1100.0, 500.0, 100.0),
    plat(1300.0, 380.0, 120.0),
    plat(1500.0, 280.0, 100.0),
    plat(1700.0, 200.0, 80.0),
    plat(1900.0, 320.0, 100.0),
    plat(2100.0, 450.0, 120.0),
    plat(2300.0, 350.0, 100.0),
];

const LEVEL_3_ROBOTS: &[RobotSpec] = &[
    normal(200.0, 130.0),
    normal(350.0, 210.0),
    normal(550.0, 290.0),
    normal(750.0, 370.0),
    normal(950.0, 450.0),
    normal(1150.0, 530.0),
    normal(1350.0, 410.0),
    normal(1550.0, 310.0),
    normal(1950.0, 350.0),
    normal(2150.0, 480.0),
    normal(2350.0, 380.0),
];

const LEVEL_4_PLATFORMS: &[PlatformSpec] = &[
    plat(100.0, 120.0, 100.0),
    plat(250.0, 200.0, 80.0),
    plat(400.0, 150.0, 120.0),
    plat(600.0, 280.0, 100.0),
    plat(800.0, 200.0, 80.0),
    plat(1000.0, 350.0, 120.0),
    plat(1200.0, 250.0, 100.0),
    plat(1400.0, 400.0, 80.0),
    plat(1600.0, 180.0, 120.0),
    plat(1800.0, 320.0, 100.0),
    plat(2000.0, 450.0, 120.0),
    plat(2200.0, 280.0, 100.0),
    plat(2400.0, 380.0, 80.0),
];

const LEVEL_4_ROBOTS: &[RobotSpec] = &[
    tough(150.0, 80.0),
    normal(300.0, 230.0),
    tough(450.0, 180.0),
    normal(650.0, 310.0),
    tough(850.0, 230.0),
    normal(1050.0, 380.0),
    tough(1250.0, 280.0),
    normal(1450.0, 430.0),
    tough(1650.0, 210.0),
    normal(1850.0, 350.0),
    tough(2050.0, 480.0),
    normal(2250.0, 310.0),
];

const LEVEL_5_PLATFORMS: &[PlatformSpec] = &[
    plat(80.0, 100.0, 80.0),
    plat(200.0, 180.0, 60.0),
    plat(320.0, 260.0, 80.0),
    plat(480.0, 340.0, 60.0),
    plat(600.0, 420.0, 80.0),
    plat(750.0, 500.0, 60.0),
    plat(900.0, 380.0, 80.0),
    plat(1050.0, 280.0, 60.0),
    plat(1200.0, 200.0, 80.0),
    plat(1350.0, 320.0, 60.0),
    plat(1500.0, 450.0, 80.0),
    plat(1650.0, 350.0, 60.0),
    plat(1800.0, 250.0, 80.0),
    plat(1950.0, 400.0, 60.0),
    plat(2100.0, 300.0, 80.0),
    plat(2250.0, 480.0, 60.0),
    plat(2400.0, 380.0, 80.0),
];

const LEVEL_5_ROBOTS: &[RobotSpec] = &[
    tough(130.0, 80.0),
    tough(250.0, 210.0),
    tough(370.0, 290.0),
    tough(530.0, 370.0),
    tough(650.0, 450.0),
    tough(800.0, 530.0),
    tough(950.0, 410.0),
    tough(1100.0, 310.0),
    tough(1250.0, 230.0),
    tough(1400.0, 350.0),
    tough(1550.0, 480.0),
    tough(1700.0, 380.0),
    tough(1850.0, 280.0),
    tough(2000.0, 430.0),
    tough(2150.0, 330.0),
    tough(2300.0, 510.0),
];

const LEVEL_6_PLATFORMS: &[PlatformSpec] = &[
    plat(120.0, 100.0, 60.0),
    plat(220.0, 180.0, 60.0),
    plat(350.0, 260.0, 60.0),
    plat(480.0, 340.0, 60.0),
    plat(610.0, 420.0, 60.0),
    plat(740.0, 500.0, 60.0),
    plat(870.0, 420.0, 60.0),
    plat(1000.0, 340.0, 60.0),
    plat(1130.0, 260.0, 60.0),
    plat(1260.0, 180.0, 60.0),
    plat(1390.0, 100.0, 60.0),
    plat(1520.0, 200.0, 80.0),
    plat(1650.0, 350.0, 60.0),
    plat(1780.0, 450.0, 60.0),
    plat(1910.0, 350.0, 60.0),
    plat(2040.0, 250.0, 80.0),
    plat(2170.0, 400.0, 60.0),
    plat(2300.0, 300.0, 60.0),
    plat(2430.0, 200.0, 80.0),
];

const LEVEL_6_ROBOTS: &[RobotSpec] = &[
    tough(150.0, 80.0),
    tough(250.0, 210.0),
    tough(380.0, 290.0),
    tough(510.0, 370.0),
    tough(640.0, 450.0),
    tough(770.0, 530.0),
    tough(900.0, 450.0),
    tough(1030.0, 370.0),
    tough(1160.0, 290.0),
    tough(1290.0, 210.0),
    tough(1420.0, 130.0),
    tough(1550.0, 230.0),
    tough(1680.0, 380.0),
    tough(1810.0, 480.0),
    tough(1940.0, 380.0),
    tough(2070.0, 280.0),
    tough(2200.0, 430.0),
    tough(2330.0, 330.0),
];

const LEVEL_7_PLATFORMS: &[PlatformSpec] = &[
    plat(100.0, 120.0, 80.0),
    plat(250.0, 200.0, 70.0),
    plat(380.0, 280.0, 60.0),
    plat(500.0, 360.0, 70.0),
    plat(650.0, 440.0, 60.0),
    plat(780.0, 520.0, 70.0),
    plat(920.0, 440.0, 60.0),
    plat(1050.0, 360.0, 70.0),
    plat(1200.0, 280.0, 60.0),
    plat(1330.0, 200.0, 70.0),
    plat(1480.0, 120.0, 80.0),
    plat(1630.0, 240.0, 60.0),
    plat(1750.0, 360.0, 70.0),
    plat(1900.0, 480.0, 60.0),
    plat(2030.0, 360.0, 70.0),
    plat(2180.0, 240.0, 60.0),
    plat(2310.0, 120.0, 80.0),
    plat(2460.0, 280.0, 60.0),
];

const LEVEL_7_ROBOTS: &[RobotSpec] = &[
    tough(130.0, 80.0),
    tough(280.0, 230.0),
    tough(410.0, 310.0),
    tough(530.0, 390.0),
    tough(680.0, 470.0),
    tough(810.0, 550.0),
    tough(950.0, 470.0),
    tough(1080.0, 390.0),
    tough(1230.0, 310.0),
    tough(1360.0, 230.0),
    tough(1510.0, 150.0),
    tough(1660.0, 270.0),
    tough(1780.0, 390.0),
    tough(1930.0, 510.0),
    tough(2060.0, 390.0),
    tough(2210.0, 270.0),
    tough(2340.0, 150.0),
    tough(2490.0, 310.0),
];

const LEVEL_8_PLATFORMS: &[PlatformSpec] = &[
    plat(80.0, 80.0, 60.0),
    plat(180.0, 140.0, 50.0),
    plat(270.0, 220.0, 50.0),
    plat(360.0, 300.0, 50.0),
    plat(450.0, 380.0, 50.0),
    plat(540.0, 460.0, 50.0),
    plat(630.0, 540.0, 50.0),
    plat(720.0, 460.0, 50.0),
    plat(810.0, 380.0, 50.0),
    plat(900.0, 300.0, 50.0),
    plat(990.0, 220.0, 50.0),
    plat(1080.0, 140.0, 50.0),
    plat(1170.0, 80.0, 60.0),
    plat(1280.0, 180.0, 50.0),
    plat(1370.0, 280.0, 50.0),
    plat(1460.0, 380.0, 50.0),
    plat(1550.0, 480.0, 50.0),
    plat(1640.0, 380.0, 50.0),
    plat(1730.0, 280.0, 50.0),
    plat(1820.0, 180.0, 50.0),
    plat(1910.0, 80.0, 60.0),
    plat(2020.0, 200.0, 50.0),
    plat(2110.0, 320.0, 50.0),
    plat(2200.0, 440.0, 50.0),
    plat(2290.0, 320.0, 50.0),
    plat(2380.0, 200.0, 50.0),
    plat(2470.0, 80.0, 60.0),
];

const LEVEL_8_ROBOTS: &[RobotSpec] = &[
    tough(110.0, 80.0),
    tough(210.0, 170.0),
    tough(300.0, 250.0),
    tough(390.0, 330.0),
    tough(480.0, 410.0),
    tough(570.0, 490.0),
    tough(660.0, 570.0),
    tough(750.0, 490.0),
    tough(840.0, 410.0),
    tough(930.0, 330.0),
    tough(1020.0, 250.0),
    tough(1110.0, 170.0),
    tough(1200.0, 110.0),
    tough(1310.0, 210.0),
    tough(1400.0, 310.0),
    tough(1490.0, 410.0),
    tough(1580.0, 510.0),
    tough(1670.0, 410.0),
    tough(1760.0, 310.0),
    tough(1850.0, 210.0),
    tough(1940.0, 110.0),
    tough(2050.0, 230.0),
    tough(2140.0, 350.0),
    tough(2230.0, 470.0),
    tough(2320.0, 350.0),
    tough(2410.0, 230.0),
    tough(2500.0, 110.0),
];

const LEVEL_9_PLATFORMS: &[PlatformSpec] = &[
    plat(60.0, 100.0, 50.0),
    plat(140.0, 160.0, 40.0),
    plat(210.0, 240.0, 40.0),
    plat(280.0, 320.0, 40.0),
    plat(350.0, 400.0, 40.0),
    plat(420.0, 480.0, 40.0),
    plat(490.0, 560.0, 40.0),
    plat(560.0, 480.0, 40.0),
    plat(630.0, 400.0, 40.0),
    plat(700.0, 320.0, 40.0),
    plat(770.0, 240.0, 40.0),
    plat(840.0, 160.0, 40.0),
    plat(910.0, 100.0, 50.0),
    plat(990.0, 180.0, 40.0),
    plat(1060.0, 260.0, 40.0),
    plat(1130.0, 340.0, 40.0),
    plat(1200.0, 420.0, 40.0),
    plat(1270.0, 500.0, 40.0),
    plat(1340.0, 420.0, 40.0),
    plat(1410.0, 340.0, 40.0),
    plat(1480.0, 260.0, 40.0),
    plat(1550.0, 180.0, 40.0),
    plat(1620.0, 100.0, 50.0),
    plat(1700.0, 200.0, 40.0),
    plat(1770.0, 300.0, 40.0),
    plat(1840.0, 400.0, 40.0),
    plat(1910.0, 500.0, 40.0),
    plat(1980.0, 400.0, 40.0),
    plat(2050.0, 300.0, 40.0),
    plat(2120.0, 200.0, 40.0),
    plat(2190.0, 100.0, 50.0),
    plat(2270.0, 220.0, 40.0),
    plat(2340.0, 340.0, 40.0),
    plat(2410.0, 460.0, 40.0),
    plat(2480.0, 340.0, 40.0),
    plat(2550.0, 220.0, 40.0),
];

const LEVEL_9_ROBOTS: &[RobotSpec] = &[
    tough(90.0, 80.0),
    tough(170.0, 190.0),
    tough(240.0, 270.0),
    tough(310.0, 350.0),
    tough(380.0, 430.0),
    tough(450.0, 510.0),
    tough(520.0, 590.0),
    tough(590.0, 510.0),
    tough(660.0, 430.0),
    tough(730.0, 350.0),
    tough(800.0, 270.0),
    tough(870.0, 190.0),
    tough(940.0, 130.0),
    tough(1020.0, 210.0),
    tough(1090.0, 290.0),
    tough(1160.0, 370.0),
    tough(1230.0, 450.0),
    tough(1300.0, 530.0),
    tough(1370.0, 450.0),
    tough(1440.0, 370.0),
    tough(1510.0, 290.0),
    tough(1580.0, 210.0),
    tough(1650.0, 130.0),
    tough(1730.0, 230.0),
    tough(1800.0, 330.0),
    tough(1870.0, 430.0),
    tough(1940.0, 530.0),
    tough(2010.0, 430.0),
    tough(2080.0, 330.0),
    tough(2150.0, 230.0),
    tough(2220.0, 130.0),
    tough(2300.0, 250.0),
    tough(2370.0, 370.0),
    tough(2440.0, 490.0),
    tough(2510.0, 370.0),
    tough(2580.0, 250.0),
];

const LEVEL_10_PLATFORMS: &[PlatformSpec] = &[
    plat(50.0, 80.0, 40.0),
    plat(120.0, 140.0, 35.0),
    plat(180.0, 200.0, 35.0),
    plat(240.0, 260.0, 35.0),
    plat(300.0, 320.0, 35.0),
    plat(360.0, 380.0, 35.0),
    plat(420.0, 440.0, 35.0),
    plat(480.0, 500.0, 35.0),
    plat(540.0, 560.0, 35.0),
    plat(600.0, 500.0, 35.0),
    plat(660.0, 440.0, 35.0),
    plat(720.0, 380.0, 35.0),
    plat(780.0, 320.0, 35.0),
    plat(840.0, 260.0, 35.0),
    plat(900.0, 200.0, 35.0),
    plat(960.0, 140.0, 35.0),
    plat(1020.0, 80.0, 40.0),
    plat(1090.0, 160.0, 35.0),
    plat(1150.0, 240.0, 35.0),
    plat(1210.0, 320.0, 35.0),
    plat(1270.0, 400.0, 35.0),
    plat(1330.0, 480.0, 35.0),
    plat(1390.0, 560.0, 35.0),
    plat(1450.0, 480.0, 35.0),
    plat(1510.0, 400.0, 35.0),
    plat(1570.0, 320.0, 35.0),
    plat(1630.0, 240.0, 35.0),
    plat(1690.0, 160.0, 35.0),
    plat(1750.0, 80.0, 40.0),
    plat(1820.0, 180.0, 35.0),
    plat(1880.0, 280.0, 35.0),
    plat(1940.0, 380.0, 35.0),
    plat(2000.0, 480.0, 35.0),
    plat(2060.0, 580.0, 35.0),
    plat(2120.0, 480.0, 35.0),
    plat(2180.0, 380.0, 35.0),
    plat(2240.0, 280.0, 35.0),
    plat(2300.0, 180.0, 35.0),
    plat(2360.0, 80.0, 40.0),
    plat(2430.0, 200.0, 35.0),
    plat(2490.0, 320.0, 35.0),
    plat(2550.0, 440.0, 35.0),
    plat(2610.0, 320.0, 35.0),
    plat(2670.0, 200.0, 35.0),
];

const LEVEL_10_ROBOTS: &[RobotSpec] = &[
    tough(80.0, 80.0),
    tough(150.0, 170.0),
    tough(210.0, 230.0),
    tough(270.0, 290.0),
    tough(330.0, 350.0),
    tough(390.0, 410.0),
    tough(450.0, 470.0),
    tough(510.0, 530.0),
    tough(570.0, 590.0),
    tough(630.0, 530.0),
    tough(690.0, 470.0),
    tough(750.0, 410.0),
    tough(810.0, 350.0),
    tough(870.0, 290.0),
    tough(930.0, 230.0),
    tough(990.0, 170.0),
    tough(1050.0, 110.0),
    tough(1120.0, 190.0),
    tough(1180.0, 270.0),
    tough(1240.0, 350.0),
    tough(1300.0, 430.0),
    tough(1360.0, 510.0),
    tough(1420.0, 590.0),
    tough(1480.0, 510.0),
    tough(1540.0, 430.0),
    tough(1600.0, 350.0),
    tough(1660.0, 270.0),
    tough(1720.0, 190.0),
    tough(1780.0, 110.0),
    tough(1850.0, 210.0),
    tough(1910.0, 310.0),
    tough(1970.0, 410.0),
    tough(2030.0, 510.0),
    tough(2090.0, 610.0),
    tough(2150.0, 510.0),
    tough(2210.0, 410.0),
    tough(2270.0, 310.0),
    tough(2330.0, 210.0),
    tough(2390.0, 110.0),
    tough(2460.0, 230.0),
    tough(2520.0, 350.0),
    tough(2580.0, 470.0),
    tough(2640.0, 350.0),
    tough(2700.0, 230.0),
];
