pub static MAX_MOTION_HELP: &str = "Motion that maps to a fully saturated color

Every flow vector is divided by this value before being colored,
vectors longer than it are drawn darker.
When missing, zero or negative the largest motion in the file is used.";

pub static COLORTEST_HELP: &str = "Write a legend image instead of converting a flow file

The legend shows the color of every motion in [-range, range] on both
axes, with black axes and a tick at every whole pixel of motion.";

pub static AFTER_HELP: &str = "Unknown flow (components above 1e9 or NaN) is drawn black.

Examples:
  colorflow frame_0001.flo
  colorflow frame_0001.flo frame_0001_color.png 4.5
  colorflow colortest 10 151";
