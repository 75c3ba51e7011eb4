/*!
# `REM <anything>` or `' <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing. A `'` may also end any line.

## Example
```text
10 REM Authored by Zaphod
20 PRINT 42 ' Answer to everything.
RUN
 42
```

*/
