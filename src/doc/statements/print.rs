/*!
# `PRINT [<list of expressions>]`
Also `? [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline (ASCII 10).
To suppress the newline, end the list with a semicolon (;) or comma (,).
Separating expressions with nothing or a semicolon (;) will print them with nothing between.
Output is divided into zones of 14 characters. A comma will advance to the start of next zone.
Numbers print with a space or minus sign in front and a space after.

## Example
```text
PRINT "Bought",100,120
Bought         100           120
```

*/
