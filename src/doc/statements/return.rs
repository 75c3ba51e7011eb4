/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
Execution continues on the line after the most recent `GOSUB`.
A `RETURN` with no `GOSUB` outstanding is a `RETURN WITHOUT GOSUB` error.

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
