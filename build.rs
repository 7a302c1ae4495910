// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds product metadata into the executable so it
//! shows up correctly in the taskbar and file properties dialog.

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "SmartCalc");
        res.set("FileDescription", "SmartCalc desktop shell");
        res.compile().expect("Failed to compile Windows resources");
    }
}
