/*!
# `GOSUB <line number>`

## Purpose
Remember where we are and move execution to the specified line number.

## Remarks
`RETURN` comes back to the line after the `GOSUB`.
The line number must be written as a number, not an expression.
If it doesn't exist an `UNDEFINED LINE` error will occur.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
