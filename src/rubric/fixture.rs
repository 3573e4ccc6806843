//! The MIPS reference page, as the unstructured draft the homework starts from
//! and as a structured solution. Both are built in memory.

use crate::document::Document;

/// The unstructured draft: plain text, section titles in comments, `*` bullets
pub fn mips_fixture_html() -> &'static str {
    MIPS_DRAFT
}

pub fn mips_fixture_document() -> Document {
    Document::parse(MIPS_DRAFT)
}

/// A submission that satisfies the homework rubric
pub fn mips_solution_html() -> &'static str {
    MIPS_SOLUTION
}

pub fn mips_solution_document() -> Document {
    Document::parse(MIPS_SOLUTION)
}

const MIPS_DRAFT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-48" />
<title>névtelen</title>
</head>
<body>
<!-- A MIPS -->
A MIPS a Microprocessor without Interlocked Pipeline Stages rövidítése.
A MIPS 32 és 64 bites RISC utasításkészletű architektúra.
Gyártója a MIPS Computer Systems, jelenlegi nevén MIPS Technologies.
A fejlesztést az 1980-as évek elején kezdte.
<!-- Kiterjesztések -->
Több opcionális kiterjesztése van. Ilyen kiterjesztés a MIPS-3D,
ami lebegőpontos számítást tesz lehetővé, SIMD utasításkészlettel.
Az MDMX SIMD utasításkészlete egész típusú számításokra lett optimalizálva.
<!-- Beépített rendszerek -->
A MIPS processzorokat beépített rendszereken használják. Ilyen például:
  * Sony PlayStation 2
  * Sony PlayStation Portable
<!-- számítógépek -->
2006-ig az SGI is MIPS processzorral állított össze számítógépeket.
Akik még alkalmazták:
  * Digital Equipment Corporation (DEC)
  * NEC
  * Pyramid Technology
  * Siemens Nixdorf
  * Tandem Computers
</body>
</html>"#;

const MIPS_SOLUTION: &str = r#"<!DOCTYPE html>
<html lang="hu">
<head>
<meta charset="UTF-8" />
<title>A MIPS architektúra</title>
</head>
<body>
<!-- Szerző: Kovács Anna (ABC123), 2024 -->
<h1>A MIPS architektúra</h1>
<h2>A MIPS</h2>
<p>A MIPS a <b>Microprocessor without Interlocked Pipeline Stages</b> rövidítése.
A MIPS 32 és 64 bites RISC utasításkészletű architektúra.
Gyártója a MIPS Computer Systems, jelenlegi nevén MIPS Technologies.
A fejlesztést az 1980-as évek elején kezdte.</p>
<h2>Kiterjesztések</h2>
<p>Több opcionális kiterjesztése van. Ilyen kiterjesztés a MIPS-3D,
ami lebegőpontos számítást tesz lehetővé, SIMD utasításkészlettel.
Az MDMX SIMD utasításkészlete egész típusú számításokra lett optimalizálva.</p>
<h2>Beépített rendszerek</h2>
<p>A MIPS processzorokat beépített rendszereken használják. Ilyen például:</p>
<ul>
  <li>Sony PlayStation 2</li>
  <li>Sony PlayStation Portable</li>
</ul>
<h2>Számítógépek</h2>
<p>2006-ig az SGI is MIPS processzorral állított össze számítógépeket.
Akik még alkalmazták:</p>
<ul>
  <li>Digital Equipment Corporation (DEC)</li>
  <li>NEC</li>
  <li>Pyramid Technology</li>
  <li>Siemens Nixdorf</li>
  <li>Tandem Computers</li>
</ul>
</body>
</html>"#;
