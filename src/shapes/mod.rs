mod polygon;

pub use self::polygon::Polygon;
