mod percent_ext;

pub use percent_ext::PercentFormat;
